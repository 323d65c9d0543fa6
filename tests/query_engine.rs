use std::io::Write;

use resource_db::data::filter::filter;
use resource_db::data::paginate::{paginate, total_pages};
use resource_db::data::tags::extract_tags;
use resource_db::{
    CsvFileSource, CsvTextSource, EngineConfig, LoadError, Query, QueryParams, Record,
    ResourceQueryEngine, ResourceSource,
};

const HEADER: &str = "Resource,PhoneNumber,Description,Keywords,Website\n";

fn sheet(rows: &[&str]) -> String {
    let mut csv = HEADER.to_string();
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

fn scenario_records() -> Vec<Record> {
    let mut ds = CsvTextSource::new(sheet(&[
        r#"Shelter,555-1111,desc1,"food, shelter",http://x"#,
        r#"Hotline,555-2222,desc2,"crisis, hotline",http://y"#,
    ]))
    .load()
    .unwrap();
    extract_tags(&mut ds, "Keywords");
    ds.records
}

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.values()[0].clone()).collect()
}

/// A mixed dataset: every record gets a subset of four tags and a word.
fn mixed_records() -> Vec<Record> {
    let tags = ["a", "b", "c", "d"];
    let words = ["alpha", "beta", "gamma"];
    let rows: Vec<String> = (0..32usize)
        .map(|i| {
            let picked: Vec<&str> = tags
                .iter()
                .enumerate()
                .filter(|(bit, _)| i & (1 << bit) != 0)
                .map(|(_, t)| *t)
                .collect();
            format!(
                "R{i},555-{i:04},{} item,\"{}\",",
                words[i % words.len()],
                picked.join(", ")
            )
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let mut ds = CsvTextSource::new(sheet(&rows)).load().unwrap();
    extract_tags(&mut ds, "Keywords");
    ds.records
}

#[test]
fn vocabulary_from_two_rows() {
    let mut ds = CsvTextSource::new(sheet(&[
        r#"A,1,d,"a, b",w"#,
        r#"B,2,d,"b, c",w"#,
    ]))
    .load()
    .unwrap();
    assert_eq!(extract_tags(&mut ds, "Keywords"), vec!["a", "b", "c"]);
}

#[test]
fn shelter_hotline_scenarios() {
    let records = scenario_records();

    let by_text = filter(&records, &Query::new("shelter"));
    assert_eq!(names(&by_text), vec!["Shelter"]);

    let both = filter(&records, &Query::default().with_tags(["food", "shelter"]));
    assert_eq!(names(&both), vec!["Shelter"]);

    let none = filter(&records, &Query::default().with_tags(["food", "crisis"]));
    assert!(none.is_empty());
}

#[test]
fn empty_query_is_identity() {
    let records = mixed_records();
    let out = filter(&records, &Query::default());
    assert_eq!(out.len(), records.len());
    assert!(out.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
}

#[test]
fn filter_output_is_ordered_subsequence() {
    let records = mixed_records();
    let queries = [
        Query::new("alpha"),
        Query::new("ITEM beta"),
        Query::default().with_tags(["a"]),
        Query::new("gamma").with_tags(["b", "c"]),
        Query::new("nothing-matches"),
    ];
    for q in &queries {
        let out = filter(&records, q);
        let positions: Vec<usize> = out
            .iter()
            .map(|r| records.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "order broken for {q:?}"
        );
    }
}

#[test]
fn adding_a_tag_never_grows_the_match_set() {
    let records = mixed_records();
    let mut query = Query::new("item");
    let mut previous = filter(&records, &query).len();
    for tag in ["a", "b", "c", "d", "zzz"] {
        query = query.with_tags([tag]);
        let now = filter(&records, &query).len();
        assert!(now <= previous, "adding {tag} grew {previous} → {now}");
        previous = now;
    }
    assert_eq!(previous, 0);
}

#[test]
fn pagination_properties() {
    for total in 0..=53usize {
        let items: Vec<usize> = (0..total).collect();
        for size in [1usize, 3, 10] {
            let expected = std::cmp::max(1, total.div_ceil(size));
            assert_eq!(total_pages(total, size), expected);
            for requested in [-3i64, 0, 1, 2, 7, 100] {
                let page = paginate(&items, requested, size);
                assert_eq!(page.total_pages, expected);
                assert!((1..=page.total_pages).contains(&page.page_number));
                assert!(page.items.len() <= size);
            }
        }
    }
}

#[test]
fn page_four_of_twenty_five_lands_on_three() {
    let items: Vec<usize> = (0..25).collect();
    let page = paginate(&items, 4, 10);
    assert_eq!(page.page_number, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items, (20..25).collect::<Vec<_>>());
}

#[test]
fn comment_rows_are_invisible() {
    let csv = sheet(&[
        "# skip,,,",
        r#"Shelter,555-1111,desc1,"food, shelter",http://x"#,
    ]);
    let engine = ResourceQueryEngine::new(EngineConfig::default(), CsvTextSource::new(csv));
    let result = engine.run(&QueryParams::from_query_string("kw=skip")).unwrap();
    assert_eq!(result.total_before_filter, 1);
    assert_eq!(result.total_after_filter, 0);
    assert_eq!(result.page.total_pages, 1);
}

#[test]
fn engine_reads_file_fresh_each_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", sheet(&["A,1,d,x,w"])).unwrap();
    file.flush().unwrap();

    let config = EngineConfig {
        source: file.path().to_path_buf(),
        page_size: 2,
        ..Default::default()
    };
    let engine = ResourceQueryEngine::from_config(config);
    assert_eq!(engine.run(&QueryParams::default()).unwrap().total_before_filter, 1);

    writeln!(file, "B,2,d,y,w").unwrap();
    writeln!(file, "C,3,d,\"x, y\",w").unwrap();
    file.flush().unwrap();

    let result = engine
        .run(&QueryParams::from_query_string("tags[]=y&pg=5"))
        .unwrap();
    assert_eq!(result.total_before_filter, 3);
    assert_eq!(result.total_after_filter, 2);
    assert_eq!(result.page.page_number, 1);
    assert_eq!(result.all_tags, vec!["x", "y"]);
    assert_eq!(result.summary(), "Showing 2 filtered resources");
}

#[test]
fn missing_file_fails_the_request() {
    let engine = ResourceQueryEngine::from_config(EngineConfig {
        source: "/nonexistent/resources.csv".into(),
        ..Default::default()
    });
    let err = engine.run(&QueryParams::default()).unwrap_err();
    assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("not found or not readable"));
}

#[test]
fn empty_file_is_malformed_header() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = CsvFileSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, LoadError::MalformedHeader));
}

#[test]
fn page_links_follow_the_query() {
    let rows: Vec<String> = (0..95).map(|i| format!("R{i},,,t,")).collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let engine =
        ResourceQueryEngine::new(EngineConfig::default(), CsvTextSource::new(sheet(&rows)));

    let params = QueryParams::from_query_string("tags[]=t&pg=6");
    let result = engine.run(&params).unwrap();
    let links = result.links();
    assert_eq!(result.page.total_pages, 10);
    assert_eq!(links.pages, vec![4, 5, 6, 7, 8]);
    assert_eq!(links.previous, Some(5));
    assert_eq!(links.next, Some(7));
    assert_eq!(
        params.with_page(links.next.unwrap()).to_query_string(),
        "tags%5B%5D=t&pg=7"
    );
}

#[test]
fn text_matches_against_values_joined_by_one_space() {
    let records = scenario_records();
    assert_eq!(
        records[0].haystack(),
        "Shelter 555-1111 desc1 food, shelter http://x"
    );

    let across = filter(&records, &Query::new("1111 desc1"));
    assert_eq!(names(&across), vec!["Shelter"]);
    let boundary = filter(&records, &Query::new("DESC2 crisis,"));
    assert_eq!(names(&boundary), vec!["Hotline"]);
}

#[test]
fn derived_tags_are_not_searched_as_text() {
    // Tags taken from Description; the tag list itself adds nothing to the text.
    let mut ds = CsvTextSource::new(sheet(&["A,1,\"  alpha ,beta\",k,w"]))
        .load()
        .unwrap();
    extract_tags(&mut ds, "Description");
    assert_eq!(ds.records[0].tags(), ["alpha", "beta"]);
    assert!(filter(&ds.records, &Query::new("alpha,beta")).is_empty());
    assert_eq!(filter(&ds.records, &Query::new("alpha ,beta")).len(), 1);
}
