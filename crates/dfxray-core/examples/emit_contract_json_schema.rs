use dfxray_core::{EvaluateRequest, EvaluateResult};
use schemars::schema_for;

fn main() {
    let request = schema_for!(EvaluateRequest);
    let result = schema_for!(EvaluateResult);
    let json = serde_json::json!({
        "request": request,
        "result": result,
    });
    let json = serde_json::to_string_pretty(&json).expect("serialize json schema");
    println!("{json}");
}
