use super::*;
use tf_core::registry::ClassificationDef;

fn registry(pairs: &[(&str, &str)]) -> ClassificationRegistry {
    let defs: Vec<ClassificationDef> = pairs
        .iter()
        .map(|(name, display)| ClassificationDef {
            name: name.to_string(),
            display_name: Some(display.to_string()),
            description: None,
        })
        .collect();
    ClassificationRegistry::build(&defs).unwrap()
}

fn table(name: &str, path: &str) -> CatalogEntity {
    CatalogEntity::new(EntityKind::Table, name, path)
}

fn column(name: &str) -> CatalogEntity {
    CatalogEntity::new(EntityKind::Column, name, "")
}

fn generic(technical_name: &str) -> ClassificationRef {
    ClassificationRef::Generic {
        technical_name: technical_name.to_string(),
    }
}

fn synth(entity: &CatalogEntity, registry: &ClassificationRegistry) -> Vec<String> {
    let mut buffer = Vec::new();
    synthesize(entity, registry, &mut buffer).unwrap();
    buffer
}

#[test]
fn test_generic_classifications_merge_into_one_statement() {
    let registry = registry(&[("A", "Finance"), ("B", "PII")]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    entity.classifications = vec![generic("A"), generic("B")];

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements,
        vec![
            "ALTER TABLE cat.sch.tbl SET TAGS ('classification' = 'Finance, PII');".to_string(),
            "COMMENT ON TABLE cat.sch.tbl IS \"\";".to_string(),
        ]
    );
}

#[test]
fn test_endorsement_is_its_own_statement() {
    let registry = registry(&[("A", "Finance")]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    entity.classifications = vec![
        ClassificationRef::Endorsement {
            value: "Promoted".to_string(),
        },
        generic("A"),
    ];

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements[0],
        "ALTER TABLE cat.sch.tbl SET TAGS ('Promoted');"
    );
    assert_eq!(
        statements[1],
        "ALTER TABLE cat.sch.tbl SET TAGS ('classification' = 'Finance');"
    );
}

#[test]
fn test_labels_emit_one_quoted_tag_statement() {
    let registry = registry(&[]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    entity.labels = vec!["gold".to_string(), "pm's pick".to_string()];

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements[0],
        "ALTER TABLE cat.sch.tbl SET TAGS ('gold','pm\\'s pick');"
    );
}

#[test]
fn test_empty_labels_emit_nothing() {
    let registry = registry(&[]);
    let entity = table("tbl", "a/b/cat/sch/tbl");

    let statements = synth(&entity, &registry);
    assert_eq!(statements, vec!["COMMENT ON TABLE cat.sch.tbl IS \"\";"]);
}

#[test]
fn test_container_comment_emitted_column_comment_omitted_when_empty() {
    // One fixture, both behaviors at once: the table has no description and
    // still gets its comment; the column has none and gets nothing.
    let registry = registry(&[]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    entity.columns.push(column("col"));

    let statements = synth(&entity, &registry);
    assert_eq!(statements, vec!["COMMENT ON TABLE cat.sch.tbl IS \"\";"]);
}

#[test]
fn test_column_endorsement_is_fixed_literal_without_lookup() {
    // Empty registry proves no lookup happens on the endorsement path.
    let registry = registry(&[]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    let mut col = column("col");
    col.classifications = vec![ClassificationRef::Endorsement {
        value: "whatever".to_string(),
    }];
    entity.columns.push(col);

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements[1],
        "ALTER TABLE cat.sch.tbl ALTER COLUMN col SET TAGS ('Certified');"
    );
}

#[test]
fn test_column_generic_classifications_stay_separate() {
    let registry = registry(&[("A", "Highly Confidential"), ("B", "PII (GDPR)")]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    let mut col = column("col");
    col.classifications = vec![generic("A"), generic("B")];
    entity.columns.push(col);

    let statements = synth(&entity, &registry);
    assert_eq!(
        &statements[1..],
        &[
            "ALTER TABLE cat.sch.tbl ALTER COLUMN col SET TAGS ('Classification' = 'Highly_Confidential');".to_string(),
            "ALTER TABLE cat.sch.tbl ALTER COLUMN col SET TAGS ('Classification' = 'PII_GDPR');".to_string(),
        ]
    );
}

#[test]
fn test_column_comment_strips_markup_and_escapes() {
    let registry = registry(&[]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    let mut col = column("col");
    col.description = Some("<p>the buyer's id</p>".to_string());
    entity.columns.push(col);

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements[1],
        "ALTER TABLE cat.sch.tbl ALTER COLUMN col COMMENT 'the buyer\\'s id';"
    );
}

#[test]
fn test_table_statement_order() {
    let registry = registry(&[("A", "Finance")]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    entity.labels = vec!["gold".to_string()];
    entity.classifications = vec![generic("A")];
    entity.description = Some("facts".to_string());
    let mut col = column("col");
    col.classifications = vec![generic("A")];
    col.description = Some("key".to_string());
    entity.columns.push(col);

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements,
        vec![
            "ALTER TABLE cat.sch.tbl SET TAGS ('gold');".to_string(),
            "ALTER TABLE cat.sch.tbl SET TAGS ('classification' = 'Finance');".to_string(),
            "COMMENT ON TABLE cat.sch.tbl IS \"facts\";".to_string(),
            "ALTER TABLE cat.sch.tbl ALTER COLUMN col SET TAGS ('Classification' = 'Finance');"
                .to_string(),
            "ALTER TABLE cat.sch.tbl ALTER COLUMN col COMMENT 'key';".to_string(),
        ]
    );
}

#[test]
fn test_unknown_classification_aborts_synthesis() {
    let registry = registry(&[]);
    let mut entity = table("tbl", "a/b/cat/sch/tbl");
    entity.classifications = vec![generic("GHOST")];

    let mut buffer = Vec::new();
    let err = synthesize(&entity, &registry, &mut buffer).unwrap_err();
    assert!(matches!(err, CoreError::UnknownClassification { .. }));
}

#[test]
fn test_short_path_is_malformed() {
    let registry = registry(&[]);
    let entity = table("tbl", "sch/tbl");

    let mut buffer = Vec::new();
    let err = synthesize(&entity, &registry, &mut buffer).unwrap_err();
    assert!(matches!(err, CoreError::MalformedPath { .. }));
}

#[test]
fn test_catalog_statements_use_bare_name() {
    let registry = registry(&[("A", "Finance")]);
    let mut entity = CatalogEntity::new(EntityKind::Catalog, "lake", "svr/pools/lake");
    entity.labels = vec!["prod".to_string()];
    entity.classifications = vec![generic("A")];
    entity.description = Some("the lake".to_string());

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements,
        vec![
            "ALTER CATALOG lake SET TAGS ('prod');".to_string(),
            "ALTER CATALOG lake SET TAGS ('classification' = 'Finance');".to_string(),
            "COMMENT ON CATALOG lake IS \"the lake\";".to_string(),
        ]
    );
}

#[test]
fn test_schema_address_comes_from_parent_relationship() {
    let registry = registry(&[]);
    let mut entity = CatalogEntity::new(EntityKind::Schema, "sales", "svr/pools/lake/sales");
    entity.parent_catalog = Some("finance_cat".to_string());
    entity.description = Some("<b>sales</b> data".to_string());

    let statements = synth(&entity, &registry);
    assert_eq!(
        statements,
        vec!["COMMENT ON SCHEMA finance_cat.sales IS \"sales data\";"]
    );
}

#[test]
fn test_schema_without_parent_is_an_error() {
    let registry = registry(&[]);
    let entity = CatalogEntity::new(EntityKind::Schema, "sales", "svr/pools/lake/sales");

    let mut buffer = Vec::new();
    let err = synthesize(&entity, &registry, &mut buffer).unwrap_err();
    assert!(matches!(err, CoreError::MissingParentCatalog { .. }));
}
