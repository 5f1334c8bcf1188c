#[cfg(test)]
pub mod test {
    use serde_json::json;

    use crate::generate::GenerationInputs;

    pub const DEFAULTS_YAML: &str = "\
bigip_receiver_defaults:
  collection_interval: 60s
  port: 443
  protocol: https
  tls:
    insecure_skip_verify: false
f5_data_export: false
";

    pub const INSTANCES_YAML: &str = "\
bigip/dev1:
  endpoint: https://10.1.1.10
  pipeline: metrics
  tls:
    insecure_skip_verify: true
bigip/dev2:
  endpoint: https://10.1.1.11
  username: admin
";

    pub const EXTERNAL_YAML: &str = "\
receivers:
  syslog:
    protocol: udp
    port: 514
";

    /// The three documents of the worked end-to-end example.
    pub fn end_to_end_inputs() -> GenerationInputs {
        GenerationInputs {
            defaults: Some(json!({
                "bigip_receiver_defaults": {"port": 443, "protocol": "https"}
            })),
            instances: Some(json!({
                "bigip/dev1": {"port": 8443, "pipeline": "metrics"}
            })),
            external: Some(json!({
                "receivers": {"syslog": {"protocol": "udp", "port": 514}}
            })),
        }
    }

    /// Switch the extended export pipeline on in `inputs`' defaults.
    pub fn with_extended_export(mut inputs: GenerationInputs) -> GenerationInputs {
        if let Some(serde_json::Value::Object(defaults)) = inputs.defaults.as_mut() {
            defaults.insert("f5_data_export".into(), json!(true));
            defaults.insert(
                "f5_pipeline_default".into(),
                json!({
                    "endpoint": "ingest.f5.example:443",
                    "headers": {"X-F5-Ingest-Token": "token"}
                }),
            );
        }
        inputs
    }

    #[test]
    fn fixture_yaml_parses() {
        for text in [DEFAULTS_YAML, INSTANCES_YAML, EXTERNAL_YAML] {
            let value: serde_json::Value = serde_yaml::from_str(text).unwrap();
            assert!(value.is_object());
        }
    }
}
