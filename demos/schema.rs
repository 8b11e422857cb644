fn main() {
  #[cfg(feature = "jsonschema")]
  {
    let schema = schemars::schema_for!(stylevalue::values::StyleValue);
    match serde_json::to_string_pretty(&schema) {
      Ok(output) => println!("{}", output),
      Err(e) => {
        eprintln!("{}", e);
        std::process::exit(1);
      }
    }
  }
}
