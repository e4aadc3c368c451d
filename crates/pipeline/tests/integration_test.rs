//! Integration tests for the ranking pipeline.
//!
//! These tests load a catalog from text, the same way the CLI does, and
//! check the ranking properties end to end.

use data_loader::{ActorRatingIndex, Catalog};
use pipeline::{rank, GenreFilter, RankedEntry, RankingEngine};

const CATALOG: &str = "\
Rank;Title;Genre;Description;Director;Actors;Year;Runtime (Minutes);Rating;Votes;Revenue (Millions);Metascore
1;Guardians of the Galaxy;Action,Adventure,Sci-Fi;A group of intergalactic criminals must stop a fanatical warrior.;James Gunn;Chris Pratt, Vin Diesel, Bradley Cooper, Zoe Saldana;2014;121;8.1;757074;333.13;76.0
2;Prometheus;Adventure,Mystery,Sci-Fi;Explorers find a clue to the origins of mankind.;Ridley Scott;Noomi Rapace, Logan Marshall-Green, Michael Fassbender, Charlize Theron;2012;124;7.0;485820;126.46;65.0
3;Split;Horror,Thriller;Three girls are kidnapped by a man with 23 personalities.;M. Night Shyamalan;James McAvoy, Anya Taylor-Joy, Haley Lu Richardson, Jessica Sula;2016;117;7.3;157606;138.12;62.0
4;Sing;Animation,Comedy,Family;A koala holds a singing competition.;Christophe Lourdelet;Matthew McConaughey,Reese Witherspoon, Seth MacFarlane, Scarlett Johansson;2016;108;7.2;60545;270.32;59.0
5;Suicide Squad;Action,Adventure,Fantasy;Imprisoned villains go on a secret mission.;David Ayer;Will Smith, Jared Leto, Margot Robbie, Viola Davis;2016;123;6.2;393727;325.02;40.0
6;The Great Wall;Action,Adventure,Fantasy;European mercenaries are imprisoned within the Great Wall.;Yimou Zhang;Matt Damon, Tian Jing, Willem Dafoe, Andy Lau;2016;103;6.1;56036;45.13;42.0
7;La La Land;Comedy,Drama,Music;A jazz pianist falls for an aspiring actress.;Damien Chazelle;Ryan Gosling, Emma Stone, Rosemarie DeWitt, J.K. Simmons;2016;128;8.3;258682;151.06;93.0
8;Mindhorn;Comedy;A has-been actor reprises his detective role.;Sean Foley;Essie Davis, Andrea Riseborough, Julian Barratt,Kenneth Branagh;2016;89;6.4;2490;;71.0
9;The Lost City of Z;Action,Adventure,Biography;A true-life drama about an explorer.;James Gray;Charlie Hunnam, Robert Pattinson, Sienna Miller, Tom Holland;2016;141;7.1;7188;8.01;78.0
10;Passengers;Adventure,Drama,Romance;A spacecraft passenger wakes up 90 years early.;Morten Tyldum;Jennifer Lawrence, Chris Pratt, Michael Sheen,Laurence Fishburne;2016;116;7.0;192177;100.01;41.0
11;Fantastic Beasts and Where to Find Them;Adventure,Family,Fantasy;Newt Scamander arrives in New York.;David Yates;Eddie Redmayne, Katherine Waterston, Alison Sudol,Dan Fogler;2016;133;7.5;232072;234.02;66.0
12;Hidden Figures;Biography,Drama,History;Three women at NASA.;Theodore Melfi;Taraji P. Henson, Octavia Spencer, Janelle Monae,Kevin Costner;2016;127;7.8;93103;169.27;74.0
this line;is broken
13;Rogue One;Action,Adventure,Sci-Fi;Rebels steal the Death Star plans.;Gareth Edwards;Felicity Jones, Diego Luna, Alan Tudyk, Donnie Yen;2016;133;7.9;323118;532.17;65.0
";

fn load() -> Catalog {
    Catalog::load_from_str(CATALOG, 0).unwrap()
}

fn assert_sorted(entries: &[RankedEntry]) {
    for pair in entries.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.title <= b.title),
            "{a:?} should not precede {b:?}"
        );
    }
}

#[test]
fn test_catalog_loads_and_skips_broken_line() {
    let catalog = load();
    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.report().skipped_malformed, 1);
}

#[test]
fn test_length_respects_limit() {
    let catalog = load();
    let engine = RankingEngine::new(&catalog);

    for limit in 1..=5 {
        let ranked = engine.rank("Action", limit).unwrap();
        assert!(ranked.len() <= limit);
    }

    let genre_matches = catalog
        .records()
        .iter()
        .filter(|record| GenreFilter::parse("Action").matches(record))
        .count();
    assert_eq!(engine.rank("Action", 0).unwrap().len(), genre_matches);
}

#[test]
fn test_limit_larger_than_catalog() {
    let catalog = load();
    let ranked = RankingEngine::new(&catalog).rank("", 1000).unwrap();
    assert_eq!(ranked.len(), catalog.len());
    assert_sorted(&ranked);
}

#[test]
fn test_output_is_sorted_for_every_request() {
    let catalog = load();
    let engine = RankingEngine::new(&catalog);

    for request in ["", "Action", "Comedy,Drama", "Sci-Fi, Fantasy", "Western"] {
        assert_sorted(&engine.rank(request, 0).unwrap());
    }
}

#[test]
fn test_actor_rating_is_max_over_unfiltered_catalog() {
    let catalog = load();
    let index = catalog.actor_index();

    // Chris Pratt: Guardians (8.1) and Passengers (7.0)
    assert_eq!(index.get("Chris Pratt"), Some(8.1));

    for record in catalog.records() {
        for actor in &record.cast {
            let best = catalog
                .records()
                .iter()
                .filter(|other| other.cast.contains(actor))
                .map(|other| other.rating)
                .fold(0.0, f64::max);
            assert_eq!(index.get(actor), Some(best));
        }
    }

    // Building from the request's subset would give Pratt a different score
    let drama_only: Vec<_> = catalog
        .records()
        .iter()
        .filter(|record| record.has_genre("Drama"))
        .cloned()
        .collect();
    let subset_index = ActorRatingIndex::build(&drama_only);
    assert_eq!(subset_index.get("Chris Pratt"), Some(7.0));
}

#[test]
fn test_ranking_is_idempotent() {
    let catalog = load();
    let engine = RankingEngine::new(&catalog);

    assert_eq!(
        engine.rank("Adventure", 4).unwrap(),
        engine.rank("Adventure", 4).unwrap()
    );
    assert_eq!(
        rank(catalog.records(), "Adventure", 4).unwrap(),
        engine.rank("Adventure", 4).unwrap()
    );
}

#[test]
fn test_min_year_prefilter() {
    let catalog = Catalog::load_from_str(CATALOG, 2014).unwrap();
    assert!(catalog.records().iter().all(|record| record.release_year >= 2014));
    assert!(catalog.records().iter().all(|record| record.title != "Prometheus"));
    assert_eq!(catalog.report().below_min_year, 1);
}

#[test]
fn test_top_action_titles() {
    let catalog = load();
    let top: Vec<String> = RankingEngine::new(&catalog)
        .rank("Action", 3)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        top,
        vec![
            "Guardians of the Galaxy, 8.1",
            "Rogue One, 7.9",
            "The Lost City of Z, 7.1",
        ]
    );
}

#[test]
fn test_json_rendering() {
    let entries = vec![RankedEntry::new("Split", 7.3)];
    let json = serde_json::to_string(&entries).unwrap();
    assert_eq!(json, r#"[{"title":"Split","score":7.3}]"#);
}
