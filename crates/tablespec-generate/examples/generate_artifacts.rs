use serde_json::json;

use tablespec_generate::{generate_json_schema, generate_sql_ddl};

fn main() {
    let document = json!({
        "version": "1.0",
        "table_name": "Medical_Claims",
        "description": "Healthcare claims and billing information",
        "columns": [
            {
                "name": "claim_id",
                "data_type": "VARCHAR",
                "length": 50,
                "nullable": {"MD": false, "MP": false, "ME": false}
            },
            {
                "name": "paid_amount",
                "data_type": "DECIMAL",
                "precision": 10,
                "scale": 2
            }
        ]
    });

    match generate_sql_ddl(&document) {
        Ok(ddl) => println!("{ddl}\n"),
        Err(err) => eprintln!("ddl generation failed: {err}"),
    }

    match generate_json_schema(&document) {
        Ok(schema) => match serde_json::to_string_pretty(&schema) {
            Ok(text) => println!("{text}"),
            Err(err) => eprintln!("failed to serialize schema: {err}"),
        },
        Err(err) => eprintln!("json schema generation failed: {err}"),
    }
}
