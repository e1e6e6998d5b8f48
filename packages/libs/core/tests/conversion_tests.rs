//! 레거시 스키마 문서 → 매핑 메타데이터 통합 테스트

use pretty_assertions::assert_eq;
use shift_core::id::{IdGenerator, SequenceDefinition};
use shift_core::legacy::{LegacyParser, SchemaLoader};
use shift_core::mapping::{
    AssociationKind, AssociationMapping, ClassConverter, CustomTypes, BuiltinTypes,
    ExportFormat, FieldMapping, JoinColumn, MappingExporter, TypeResolver,
};
use shift_core::Error;

const BLOG_SCHEMA: &str = r#"
detect_relations: true

User:
  tableName: auth.users
  columns:
    id:
      type: integer(8)
      primary: true
      autoincrement: true
    username:
      type: string(64)
      notnull: true
      unique: true
    created_at: timestamp
  indexes:
    uniq_username:
      fields: [username]
      type: unique

Article:
  columns:
    title: string(100)
    body: clob
    state: enum
    headline:
      type: string
      name: head_line as headline
    revision:
      type: integer
      version: true
  relations:
    author:
      class: User
      onDelete: CASCADE
    Tags:
      class: Tag
      refClass: ArticleTag
      foreignAlias: articles

Tag:
  columns:
    name: string(32)

ArticleTag:
  columns:
    article_id:
      type: integer
      primary: true
    tag_id:
      type: integer
      primary: true
  relations:
    Article:
      type: one
      foreignType: one
    Tag: ~
"#;

fn convert_blog() -> Vec<shift_core::mapping::ClassMetadata> {
    let document = LegacyParser::parse_yaml(BLOG_SCHEMA).unwrap();
    ClassConverter::default().convert_all(&document).unwrap()
}

#[test]
fn test_blog_schema_class_order() {
    let classes = convert_blog();
    let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["User", "Article", "Tag", "ArticleTag"]);
}

#[test]
fn test_user_mapping() {
    let classes = convert_blog();
    let user = &classes[0];

    assert_eq!(user.table.schema.as_deref(), Some("auth"));
    assert_eq!(user.table.name.as_deref(), Some("users"));
    assert_eq!(user.id_generator, IdGenerator::Auto);
    assert_eq!(
        user.field("id").unwrap(),
        &FieldMapping {
            length: Some(8),
            id: true,
            ..FieldMapping::new("id", "id", "integer")
        }
    );
    assert_eq!(
        user.field("username").unwrap(),
        &FieldMapping {
            length: Some(64),
            notnull: Some(true),
            unique: Some(true),
            ..FieldMapping::new("username", "username", "string")
        }
    );
    assert_eq!(user.field("created_at").unwrap().type_name, "datetime");
    assert_eq!(user.table.unique_constraints["uniq_username"].columns, vec!["username"]);
}

#[test]
fn test_article_mapping() {
    let classes = convert_blog();
    let article = &classes[1];

    assert_eq!(article.table.name, None);
    assert_eq!(article.field("body").unwrap().type_name, "text");
    assert_eq!(article.field("state").unwrap().type_name, "string");

    let headline = article.field("headline").unwrap();
    assert_eq!(headline.column_name, "head_line");
    assert_eq!(article.field("revision").unwrap().version, Some(true));

    let id = article.field("id").unwrap();
    assert!(id.id);
    assert_eq!(id.type_name, "integer");
    assert_eq!(article.identifier_fields().count(), 1);
    assert_eq!(article.id_generator, IdGenerator::Auto);

    assert_eq!(
        article.association("author").unwrap(),
        &AssociationMapping {
            kind: AssociationKind::OneToMany,
            field_name: "author".to_string(),
            target_entity: "User".to_string(),
            mapped_by: "Article".to_string(),
            join_columns: vec![JoinColumn {
                name: "user".to_string(),
                referenced_column_name: "id".to_string(),
                on_delete: Some("CASCADE".to_string()),
            }],
            join_entity: None,
        }
    );
    assert_eq!(
        article.association("Tags").unwrap(),
        &AssociationMapping {
            kind: AssociationKind::ManyToMany,
            field_name: "Tags".to_string(),
            target_entity: "Tag".to_string(),
            mapped_by: "articles".to_string(),
            join_columns: vec![],
            join_entity: Some("ArticleTag".to_string()),
        }
    );
}

#[test]
fn test_pivot_mapping() {
    let classes = convert_blog();
    let pivot = &classes[3];

    assert!(pivot.field("id").is_none());
    assert_eq!(pivot.identifier_fields().count(), 2);
    assert_eq!(pivot.id_generator, IdGenerator::None);

    let article = pivot.association("Article").unwrap();
    assert_eq!(article.kind, AssociationKind::OneToOne);
    assert_eq!(article.join_columns[0].name, "article");

    let tag = pivot.association("Tag").unwrap();
    assert_eq!(tag.kind, AssociationKind::OneToMany);
    assert_eq!(tag.mapped_by, "ArticleTag");
}

#[test]
fn test_every_class_has_identifier() {
    for class in convert_blog() {
        let expected = match class.name.as_str() {
            // 복합 키 피벗 클래스
            "ArticleTag" => 2,
            _ => 1,
        };
        assert_eq!(
            class.identifier_fields().count(),
            expected,
            "identifier count for {}",
            class.name
        );
    }
}

#[test]
fn test_legacy_flag_values_convert() {
    let document = LegacyParser::parse_yaml(
        "User:\n  columns:\n    uid:\n      type: integer\n      primary: 1\n      autoincrement: 1\n      notnull: yes\n",
    )
    .unwrap();

    let user = ClassConverter::default()
        .convert_class("User", document.get("User").unwrap())
        .unwrap();

    let uid = user.field("uid").unwrap();
    assert!(uid.id);
    assert_eq!(uid.notnull, Some(true));
    assert!(!user.has_field("id"));
    assert_eq!(user.id_generator, IdGenerator::Auto);
}

#[test]
fn test_sequence_generator() {
    let document = LegacyParser::parse_yaml(
        r#"
Invoice:
  columns:
    id:
      type: integer
      primary: true
      sequence:
        name: invoice_seq
        size: 10
        value: 1000
"#,
    )
    .unwrap();

    let invoice = ClassConverter::default()
        .convert_class("Invoice", document.get("Invoice").unwrap())
        .unwrap();

    assert_eq!(
        invoice.id_generator,
        IdGenerator::Sequence(SequenceDefinition {
            sequence_name: "invoice_seq".to_string(),
            allocation_size: Some(10),
            initial_value: Some(1000),
        })
    );
}

#[test]
fn test_unknown_type_produces_no_metadata() {
    let document = LegacyParser::parse_yaml(
        r#"
Ok:
  columns:
    name: string
Broken:
  columns:
    shape: frobnicate
"#,
    )
    .unwrap();
    let converter = ClassConverter::default();

    let results = converter.convert_document(&document);
    assert!(results[0].1.is_ok());
    match &results[1] {
        (name, Err(Error::UnknownType { type_name })) => {
            assert_eq!(name, "Broken");
            assert_eq!(type_name, "frobnicate");
        }
        other => panic!("expected unknown type error, got {:?}", other),
    }
}

#[test]
fn test_custom_types_from_configuration() {
    let document = LegacyParser::parse_yaml(
        r#"
Place:
  columns:
    location: geometry
"#,
    )
    .unwrap();

    let resolver = TypeResolver::new(CustomTypes::new(BuiltinTypes).with_type("point"))
        .with_alias("geometry", "point");
    let place = ClassConverter::new(resolver)
        .convert_class("Place", document.get("Place").unwrap())
        .unwrap();

    assert_eq!(place.field("location").unwrap().type_name, "point");
}

#[test]
fn test_load_convert_export() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blog.yml"), BLOG_SCHEMA).unwrap();

    let document = SchemaLoader::from_paths(&[dir.path()]).unwrap();
    let classes = ClassConverter::default().convert_all(&document).unwrap();
    let exporter = MappingExporter::new(ExportFormat::Json);

    let article = classes.iter().find(|c| c.name == "Article").unwrap();
    assert_eq!(exporter.file_name(article), "Article.orm.json");

    let value: serde_json::Value = serde_json::from_str(&exporter.export(article).unwrap()).unwrap();
    assert_eq!(value["associations"][0]["kind"], "oneToMany");
    assert_eq!(value["associations"][1]["kind"], "manyToMany");
    assert_eq!(value["associations"][1]["joinColumns"], serde_json::json!([]));
}
