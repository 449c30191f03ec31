use crate::MetadataSchema;

/// Emits the CTE block exposing each metadata schema as a virtual table: one
/// `<schemaName> AS (...)` per schema over the physical storage tables, joined
/// with `, ` behind a single `WITH`. Every CTE projects the whole metadata
/// blob; no field-level projection is performed.
///
/// Callers must not pass an empty slice (there is no zero-CTE `WITH`).
pub(crate) fn write_common_table_expressions(schemas: &[MetadataSchema]) -> String {
    let expressions: Vec<String> = schemas.iter().map(write_common_table_expression).collect();
    format!("WITH {}", expressions.join(", "))
}

fn write_common_table_expression(schema: &MetadataSchema) -> String {
    format!(
        "{name} AS (\
         select dp_.data_product_id, dp_.parent_data_product_id, dp_.external_id, dp_.name, dp_.metadata \
         from data_product dp_ \
         inner join data_product_metadata_schema dpms_ on dpms_.data_product_id = dp_.data_product_id \
         inner join metadata_schema ms_ on ms_.metadata_schema_id = dpms_.metadata_schema_id \
         where ms_.metadata_schema_id = {id})",
        name = schema.schema_name,
        id = schema.metadata_schema_id,
    )
}

#[cfg(test)]
mod tests {
    use super::write_common_table_expressions;
    use crate::{MetadataSchema, MetadataSchemaField};

    fn schema(id: i64, name: &str) -> MetadataSchema {
        MetadataSchema {
            metadata_schema_id: id,
            schema_name: name.to_string(),
            fields: vec![MetadataSchemaField {
                field_name: "name".to_string(),
                json_path: "$.name".to_string(),
            }],
        }
    }

    #[test]
    fn emits_one_cte_per_schema_in_slice_order() {
        let sql = write_common_table_expressions(&[schema(1, "Person"), schema(2, "Organization")]);

        assert!(sql.starts_with("WITH Person AS ("));
        assert!(sql.contains("), Organization AS ("));
        assert_eq!(sql.matches(" AS (").count(), 2);
        assert_eq!(sql.matches("WITH").count(), 1);
    }

    #[test]
    fn cte_filters_on_the_schema_id() {
        let sql = write_common_table_expressions(&[schema(7, "Person")]);

        assert!(sql.contains("where ms_.metadata_schema_id = 7"));
        assert!(sql.contains("from data_product dp_"));
        assert!(sql.contains(
            "inner join data_product_metadata_schema dpms_ \
             on dpms_.data_product_id = dp_.data_product_id"
        ));
        assert!(sql.contains(
            "inner join metadata_schema ms_ \
             on ms_.metadata_schema_id = dpms_.metadata_schema_id"
        ));
    }
}
