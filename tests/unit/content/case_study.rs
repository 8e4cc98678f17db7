use super::*;

fn study(title: &str) -> CaseStudy {
    CaseStudy {
        title: title.to_owned(),
        category: "c".to_owned(),
        hero_image: "/x.jpg".to_owned(),
        overview: String::new(),
        problem: String::new(),
        solution: String::new(),
        features: vec!["f".to_owned()],
        tech_stack: vec!["Rust".to_owned()],
    }
}

#[test]
fn builtin_table_keeps_file_order() {
    let t = ContentTable::builtin().unwrap();
    let ids: Vec<_> = t.ids().collect();
    assert_eq!(ids, ["project-management-tool", "tech-fest-website", "siem-tool"]);
}

#[test]
fn siem_tool_is_cybersecurity() {
    let t = ContentTable::builtin().unwrap();
    let s = t.lookup("siem-tool").unwrap();
    assert_eq!(s.category, "Cybersecurity");
    assert_eq!(s.tech_stack, ["Python", "Elasticsearch", "Kibana", "RabbitMQ"]);
}

#[test]
fn unknown_id_renders_fallback() {
    let t = ContentTable::builtin().unwrap();
    assert!(t.lookup("nope").is_none());
    let page = t.page(Some("nope"));
    assert_eq!(page, ProjectPage::NotFound);
    assert_eq!(page.headline(), NOT_FOUND_MESSAGE);
    assert_eq!(t.page(None), ProjectPage::NotFound);
}

#[test]
fn next_project_cycles_over_key_order() {
    let t = ContentTable::builtin().unwrap();
    assert_eq!(t.next_id("project-management-tool"), Some("tech-fest-website"));
    assert_eq!(t.next_id("siem-tool"), Some("project-management-tool"));
    assert_eq!(t.next_id("unknown"), Some("project-management-tool"));
}

#[test]
fn found_page_links_back_and_forward() {
    let t = ContentTable::builtin().unwrap();
    let page = t.page(Some("tech-fest-website"));
    let ProjectPage::Found { id, study, next } = page else {
        panic!("expected a found page");
    };
    assert_eq!(id, "tech-fest-website");
    assert_eq!(study.title, "TechnoVerse 2024");
    assert_eq!(next.id, "siem-tool");
    assert_eq!(next.target().href(), "/project/siem-tool");
    assert_eq!(page.back_target().href(), "/#projects");
}

#[test]
fn single_entry_table_is_its_own_next() {
    let t = ContentTable::from_entries(vec![("only".to_owned(), study("Only"))]).unwrap();
    assert_eq!(t.next_id("only"), Some("only"));
}

#[test]
fn empty_table_has_no_next() {
    let t = ContentTable::from_entries(Vec::new()).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.next_id("x"), None);
    assert_eq!(t.page(Some("x")), ProjectPage::NotFound);
}

#[test]
fn duplicate_or_blank_ids_are_rejected() {
    let dup = vec![("a".to_owned(), study("A")), ("a".to_owned(), study("B"))];
    assert!(ContentTable::from_entries(dup).is_err());
    assert!(ContentTable::from_entries(vec![(" ".to_owned(), study("A"))]).is_err());
}

#[test]
fn json_round_trips_through_reader() {
    let t = ContentTable::builtin().unwrap();
    let json = t.to_json_pretty().unwrap();
    assert!(json.contains("\"heroImage\""));
    assert!(json.contains("\"techStack\""));
    let back = ContentTable::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, t);
}

#[test]
fn malformed_json_keeps_the_parser_error() {
    let err = ContentTable::from_reader(&b"[{\"id\": \"x\"}]"[..]).unwrap_err();
    assert!(matches!(err, FolioError::Json { what: "case study", .. }));
    let source = std::error::Error::source(&err)
        .and_then(|s| s.downcast_ref::<serde_json::Error>())
        .expect("serde_json source");
    assert!(source.is_data(), "{source}");
}

#[test]
fn missing_file_is_an_io_error_with_its_path() {
    let path = std::env::temp_dir().join("folio-motion-no-such-case-studies.json");
    let err = ContentTable::from_path(&path).unwrap_err();
    match &err {
        FolioError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an io error, got {other:?}"),
    }
}
