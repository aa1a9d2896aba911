use tablespec_core::umf_json_schema;

fn main() {
    let schema = umf_json_schema();
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize schema: {err}"),
    }
}
