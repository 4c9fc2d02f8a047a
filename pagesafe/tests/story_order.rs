use pagesafe::{Corner, Link, PageOrder, PositionedElement, Story, StoryError};

fn story_with(ids: &[&str]) -> Story {
    let mut s = Story::default();
    for id in ids {
        s.add_page(*id).unwrap();
    }
    s
}

#[test]
fn arrange_moves_page_and_keeps_selection() {
    let mut s = story_with(&["a", "b", "c", "d"]);
    s.set_current_page("b").unwrap();
    assert_eq!(s.current_page_index(), 1);

    s.arrange_page("d", 0).unwrap();
    assert_eq!(s.page_ids(), vec!["d", "a", "b", "c"]);
    assert_eq!(s.current_page_index(), 2, "current page follows its id");

    s.arrange_page("b", 3).unwrap();
    assert_eq!(s.page_ids(), vec!["d", "a", "c", "b"]);
    assert_eq!(s.current_page().map(|p| p.id.as_str()), Some("b"));
}

#[test]
fn failed_edits_leave_story_untouched() {
    let mut s = story_with(&["a", "b"]);
    let ver = s.version();
    assert!(matches!(s.arrange_page("zz", 0), Err(StoryError::UnknownPage(_))));
    assert!(matches!(
        s.arrange_page("a", 2),
        Err(StoryError::PositionOutOfRange { position: 2, len: 2 })
    ));
    assert!(matches!(s.set_current_page("nope"), Err(StoryError::UnknownPage(_))));
    assert!(matches!(s.add_page("a"), Err(StoryError::DuplicatePage(_))));
    assert_eq!(s.version(), ver, "state mutated on error");
    assert_eq!(s.page_ids(), vec!["a", "b"]);
    assert_eq!(s.current_page_index(), 0);
}

#[test]
fn noop_arrange_does_not_bump_version() {
    let mut s = story_with(&["a", "b"]);
    let ver = s.version();
    s.arrange_page("a", 0).unwrap();
    s.set_current_page("a").unwrap();
    assert_eq!(s.version(), ver);
    s.set_current_page("b").unwrap();
    assert!(s.version() > ver);
}

#[test]
fn removing_pages_keeps_current_in_range() {
    let mut s = story_with(&["a", "b", "c"]);
    s.set_current_page("c").unwrap();
    s.remove_page("a").unwrap();
    assert_eq!(s.current_page().map(|p| p.id.as_str()), Some("c"));
    s.remove_page("c").unwrap();
    assert_eq!(s.current_page_index(), 0);
    assert_eq!(s.current_page().map(|p| p.id.as_str()), Some("b"));
    s.remove_page("b").unwrap();
    assert_eq!(s.page_count(), 0);
    assert!(s.current_page().is_none());
}

#[test]
fn elements_are_validated_on_insert() {
    let mut s = story_with(&["a"]);
    let ok = PositionedElement::new("e1", 10.0, 10.0, 10.0);
    s.add_element("a", ok.clone()).unwrap();
    assert!(matches!(s.add_element("a", ok), Err(StoryError::DuplicateElement { .. })));
    let negative = PositionedElement::new("e2", 10.0, -1.0, 10.0);
    let err = s.add_element("a", negative).unwrap_err();
    assert_eq!(err.code(), "invalid_element");
    let nan = PositionedElement::new("e3", f64::NAN, 1.0, 1.0);
    assert!(s.add_element("a", nan).is_err());
    assert!(matches!(
        s.add_element("zz", PositionedElement::new("e4", 0.0, 1.0, 1.0)),
        Err(StoryError::UnknownPage(_))
    ));
    let anonymous = PositionedElement { id: String::new(), ..PositionedElement::new("x", 0.0, 1.0, 1.0) };
    assert!(matches!(
        s.add_element("a", anonymous),
        Err(StoryError::InvalidElement { reason: "id required", .. })
    ));
    assert!(s.remove_element("a", "missing").is_err());
    assert_eq!(s.remove_element("a", "e1").unwrap().id, "e1");
}

#[test]
fn checklist_scans_pages_in_order() {
    let mut s = story_with(&["p1", "p2"]);
    let link = Link::new("https://example.com");
    s.add_element("p2", PositionedElement::new("low", 600.0, 100.0, 100.0).with_link(link.clone())).unwrap();
    s.add_element("p1", PositionedElement::new("top", 0.0, 100.0, 20.0).with_link(link.clone())).unwrap();
    s.add_element("p1", PositionedElement::new("bare", 650.0, 100.0, 100.0)).unwrap();
    s.add_element("p1", PositionedElement::new("tilted", 525.0, 200.0, 20.0).with_rotation(30.0).with_link(link)).unwrap();

    let issues = s.link_zone_issues();
    let found: Vec<(&str, &str, Corner)> = issues
        .iter()
        .map(|i| (i.page_id.as_str(), i.element_id.as_str(), i.corner))
        .collect();
    assert_eq!(found, vec![("p1", "tilted", Corner::UpperRight), ("p2", "low", Corner::UpperLeft)]);
    assert!(issues.iter().all(|i| i.corner_y > i.limit));

    assert_eq!(s.page_has_link_issues("p1"), Some(true));
    s.arrange_page("p2", 0).unwrap();
    assert_eq!(s.link_zone_issues()[0].page_id, "p2");
    assert_eq!(s.page_has_link_issues("missing"), None);
}
