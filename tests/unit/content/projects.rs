use super::*;
use crate::content::case_study::CaseStudy;

#[test]
fn every_card_links_to_a_case_study() {
    let table = ContentTable::builtin().unwrap();
    assert!(dangling_cards(&SHOWCASE_CARDS, &table).is_empty());
    for card in &SHOWCASE_CARDS {
        assert_eq!(card.target(), NavTarget::Path(format!("/project/{}", card.id)));
    }
}

#[test]
fn cards_missing_from_the_table_are_reported() {
    let only = ContentTable::from_entries(vec![(
        "siem-tool".to_owned(),
        CaseStudy {
            title: "SIEM Tool".to_owned(),
            category: "Cybersecurity".to_owned(),
            hero_image: String::new(),
            overview: String::new(),
            problem: String::new(),
            solution: String::new(),
            features: Vec::new(),
            tech_stack: Vec::new(),
        },
    )])
    .unwrap();
    assert_eq!(
        dangling_cards(&SHOWCASE_CARDS, &only),
        ["project-management-tool", "tech-fest-website"]
    );
}
