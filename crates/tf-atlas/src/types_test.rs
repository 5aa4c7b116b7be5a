use super::*;

const TYPEDEFS_JSON: &str = r#"{
  "enumDefs": [],
  "classificationDefs": [
    {
      "name": "MICROSOFT.PII",
      "description": "Personal data fallback",
      "options": { "displayName": "Personal Data" }
    },
    {
      "name": "FIN.INTERNAL",
      "description": "Finance internal"
    }
  ]
}"#;

const BUNDLE_JSON: &str = r#"{
  "entities": [
    {
      "guid": "t-1",
      "typeName": "azure_synapse_dedicated_sql_table",
      "attributes": {
        "name": "orders",
        "qualifiedName": "svr/pools/cat/sch/orders",
        "userDescription": "<p>Order facts</p>"
      },
      "labels": ["gold"],
      "classifications": [
        { "typeName": "MICROSOFT.POWERBI.ENDORSEMENT", "attributes": { "endorsement": "Certified" } },
        { "typeName": "MICROSOFT.PII" }
      ],
      "relationshipAttributes": {
        "columns": [{ "guid": "c-1" }]
      }
    }
  ],
  "referredEntities": {
    "c-1": {
      "guid": "c-1",
      "typeName": "azure_synapse_dedicated_sql_column",
      "attributes": { "name": "order_id", "qualifiedName": "svr/pools/cat/sch/orders/order_id" }
    }
  }
}"#;

#[test]
fn test_typedefs_deserialize_and_flatten() {
    let response: TypeDefsResponse = serde_json::from_str(TYPEDEFS_JSON).unwrap();
    assert_eq!(response.classification_defs.len(), 2);

    let with_option = response.classification_defs[0].to_def();
    assert_eq!(with_option.display_name.as_deref(), Some("Personal Data"));
    assert_eq!(with_option.description.as_deref(), Some("Personal data fallback"));

    let without_option = response.classification_defs[1].to_def();
    assert_eq!(without_option.display_name, None);
    assert_eq!(without_option.description.as_deref(), Some("Finance internal"));
}

#[test]
fn test_entity_bundle_deserializes() {
    let bundle: EntityBundle = serde_json::from_str(BUNDLE_JSON).unwrap();
    let root = &bundle.entities[0];
    assert_eq!(root.type_name, SYNAPSE_TABLE_TYPE);
    assert_eq!(root.attributes.name, "orders");
    assert_eq!(root.labels, vec!["gold"]);
    assert_eq!(root.classifications.len(), 2);
    assert_eq!(
        root.classifications[0].attributes.endorsement.as_deref(),
        Some("Certified")
    );
    assert_eq!(root.relationship_attributes.columns[0].guid, "c-1");
    assert!(bundle.referred_entities.contains_key("c-1"));
}

#[test]
fn test_sparse_record_defaults() {
    let record: EntityRecord = serde_json::from_str(
        r#"{ "guid": "g", "typeName": "azure_synapse_dedicated_sql_db" }"#,
    )
    .unwrap();
    assert!(record.labels.is_empty());
    assert!(record.classifications.is_empty());
    assert!(record.relationship_attributes.db.is_none());
    assert!(record.relationship_attributes.columns.is_empty());
}

#[test]
fn test_entity_kind_mapping() {
    assert_eq!(entity_kind_for(SYNAPSE_DB_TYPE), Some(EntityKind::Catalog));
    assert_eq!(entity_kind_for(SYNAPSE_SCHEMA_TYPE), Some(EntityKind::Schema));
    assert_eq!(entity_kind_for(SYNAPSE_TABLE_TYPE), Some(EntityKind::Table));
    assert_eq!(entity_kind_for(SYNAPSE_COLUMN_TYPE), Some(EntityKind::Column));
    assert_eq!(entity_kind_for("something_else"), None);
}
