//! Tests for line normalization and classification

use rstest::rstest;
use rstree::domain::{scan_lines, Classifier, Encoding, NodePayload};

#[test]
fn given_export_snippet_when_scanning_then_depths_follow_marker_runs() {
    let text = "\
|--- Addicted_Score <= 5.50
|   |--- class: 0
|   |--- Sleep_Hours <= 6.00
|   |   |--- class: 1
";
    let lines = scan_lines(text, &Encoding::default());

    let depths: Vec<usize> = lines.iter().map(|l| l.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 2]);

    let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "Addicted_Score <= 5.50",
            "class: 0",
            "Sleep_Hours <= 6.00",
            "class: 1"
        ]
    );
}

#[test]
fn given_blank_and_filler_lines_when_scanning_then_skipped() {
    let text = "\n|---\n|   |---    \n\t\n|--- class: 3\n\n";
    let lines = scan_lines(text, &Encoding::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, "class: 3");
}

#[test]
fn given_inconsistent_whitespace_when_scanning_then_content_trimmed() {
    let lines = scan_lines("|-  - -   Age >  30.00   ", &Encoding::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, "Age >  30.00");
}

#[test]
fn given_custom_encoding_when_scanning_then_markers_respected() {
    let encoding = Encoding {
        marker: '#',
        fill: vec!['*'],
        keywords: vec!["label".into()],
    };
    let lines = scan_lines("#   #*** label: 4", &encoding);

    assert_eq!(lines[0].depth, 1);
    assert_eq!(lines[0].content, "label: 4");

    // default markers are plain content under this encoding
    let other = scan_lines("|--- x <= 1", &encoding);
    assert_eq!(other[0].depth, 0);
    assert_eq!(other[0].content, "|--- x <= 1");
}

#[rstest]
#[case("class: 0", Some(NodePayload::Class(0)))]
#[case("class: 2", Some(NodePayload::Class(2)))]
#[case("Class: 10", Some(NodePayload::Class(10)))]
#[case("CLASS:7", Some(NodePayload::Class(7)))]
#[case("clase: 3", Some(NodePayload::Class(3)))]
#[case("class: unknown", Some(NodePayload::Class(0)))]
#[case("class: #2 (weighted)", Some(NodePayload::Class(2)))]
#[case(
    "Mental_Health_Score <= 7.50",
    Some(NodePayload::Condition("Mental_Health_Score <= 7.50".into()))
)]
#[case(
    "first class: passengers <= 2",
    Some(NodePayload::Condition("first class: passengers <= 2".into()))
)]
#[case("", None)]
fn given_content_when_classifying_then_expected_payload(
    #[case] content: &str,
    #[case] expected: Option<NodePayload>,
) {
    let classifier = Classifier::default();
    assert_eq!(classifier.classify(content), expected);
}

#[test]
fn given_custom_keyword_when_classifying_then_default_keyword_is_condition() {
    let encoding = Encoding {
        keywords: vec!["label".into()],
        ..Encoding::default()
    };
    let classifier = Classifier::new(&encoding);

    assert_eq!(classifier.classify("label: 5"), Some(NodePayload::Class(5)));
    assert_eq!(
        classifier.classify("class: 5"),
        Some(NodePayload::Condition("class: 5".into()))
    );
}
