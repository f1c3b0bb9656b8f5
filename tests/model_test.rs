//! Integration tests for the typed document model.
//!
//! Documents built through the model's constructors must always serialize to
//! values the validator accepts, and decode back to the same tree.

use docshape::{
    decode_document, validate_document, Block, ComponentBlock, ComponentProp, ComponentPropKind,
    Container, ContainerKind, Document, Heading, HeadingLevel, Inline, Layout, Link, Mark, Marks,
    Node, Paragraph, Relationship, RelationshipData, RelationshipSelection, RelationshipValue,
    Text, TextAlign,
};
use serde_json::{json, Map, Number};

fn assert_round_trip(doc: &Document) {
    let value = serde_json::to_value(doc).unwrap();
    validate_document(&value).unwrap();
    let decoded = decode_document(&value).unwrap();
    assert_eq!(&decoded, doc);
}

fn article() -> Document {
    let mut doc = Document::new();

    let mut title = Heading::new(HeadingLevel::new(1).unwrap(), "Release notes");
    title.text_align = Some(TextAlign::Center);
    doc.add_block(Block::Heading(title));

    let mut marks = Marks::new();
    for mark in Mark::ALL {
        marks.insert(mark);
    }
    doc.add_block(Block::Paragraph(Paragraph::with_inlines(vec![
        Inline::Text(Text::new("Read the ")),
        Inline::Link(Link::new("/changelog", "changelog")),
        Inline::Text(Text::with_marks(" carefully", marks)),
        Inline::Relationship(
            Relationship::new("mention").with_data(RelationshipData::new("u1").with_label("Ada")),
        ),
    ])));

    doc.add_block(Block::Layout(Layout::new(vec![Number::from(2u64), Number::from(1u64)])));
    doc.add_block(Block::Container(Container::divider()));
    doc.add_block(Block::Container(Container::new(
        ContainerKind::OrderedList,
        vec![Node::Block(Block::Container(Container::new(
            ContainerKind::ListItem,
            vec![Node::Block(Block::Paragraph(
                Paragraph::with_text("first").aligned(TextAlign::End),
            ))],
        )))],
    )));
    doc
}

#[test]
fn test_article_round_trip() {
    assert_round_trip(&article());
}

#[test]
fn test_empty_document_round_trip() {
    assert_round_trip(&Document::new());
}

#[test]
fn test_every_heading_level_round_trip() {
    let blocks = (1..=6)
        .map(|level| Block::Heading(Heading::new(HeadingLevel::new(level).unwrap(), "h")))
        .collect();
    assert_round_trip(&Document::from_blocks(blocks));
}

#[test]
fn test_every_container_round_trip() {
    let blocks = ContainerKind::ALL
        .into_iter()
        .map(|kind| Block::Container(Container::new(kind, vec![Node::from(Text::bold("x"))])))
        .collect();
    assert_round_trip(&Document::from_blocks(blocks));
}

#[test]
fn test_component_block_round_trip() {
    let mut component = ComponentBlock::new("gallery");

    let mut props = Map::new();
    props.insert("title".to_string(), json!("Photos"));
    props.insert("images".to_string(), json!([{ "src": "a.png" }, { "src": "b.png" }]));
    component.props = props;

    let mut author_data = Map::new();
    author_data.insert("email".to_string(), json!("ada@example.com"));
    component.relationships.insert(
        "author".to_string(),
        RelationshipValue::new(
            "author",
            RelationshipSelection::One(RelationshipData::new("1").with_data(author_data)),
        ),
    );
    component.relationships.insert(
        "tags".to_string(),
        RelationshipValue::new(
            "tags",
            RelationshipSelection::Many(vec![
                RelationshipData::new("t1"),
                RelationshipData::new("t2").with_label("Two"),
            ]),
        ),
    );
    component.relationships.insert(
        "cover".to_string(),
        RelationshipValue::new("cover", RelationshipSelection::Empty),
    );

    component.children = vec![
        Node::Block(Block::ComponentProp(ComponentProp::new(
            ComponentPropKind::ComponentInlineProp,
            vec!["title".into()],
        ))),
        Node::Block(Block::ComponentProp(ComponentProp {
            kind: ComponentPropKind::ComponentBlockProp,
            prop_path: vec!["images".into(), 1u64.into(), "caption".into()],
            children: vec![Node::Block(Block::Paragraph(Paragraph::with_text("caption")))],
        })),
    ];

    assert_round_trip(&Document::from_blocks(vec![Block::ComponentBlock(component)]));
}

#[test]
fn test_serialized_shape_matches_editor_output() {
    let doc = Document::from_blocks(vec![Block::Paragraph(Paragraph::with_inlines(vec![
        Inline::Text(Text::bold("hi")),
    ]))]);
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!([{ "type": "paragraph", "children": [{ "text": "hi", "bold": true }] }])
    );
}

#[test]
fn test_decode_drops_extra_relationship_entry_keys() {
    let value = json!([{
        "type": "component-block",
        "component": "card",
        "relationships": { "owner": { "relationship": "owner", "data": null, "many": false } },
        "props": {},
        "children": []
    }]);
    let doc = decode_document(&value).unwrap();
    let reserialized = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        reserialized[0]["relationships"]["owner"],
        json!({ "relationship": "owner", "data": null })
    );
    assert!(validate_document(&reserialized).is_ok());
}

#[test]
fn test_stats_of_decoded_document() {
    let stats = article().stats();
    assert_eq!(stats.blocks, 11);
    assert_eq!(stats.inline_containers, 2);
    assert_eq!(stats.texts, 9);
}
