use serde_json::Value;

/// Name of the object the injected bridge installs on `window`.
pub const BRIDGE_GLOBAL: &str = "__ovlp";

/// Something that can run a snippet of script in the page.
pub trait ScriptSink {
    fn run_script(&self, script: &str);
}

/// Builds a guarded call into the page bridge, e.g. `window.__ovlp && window.__ovlp.seek(10);`.
///
/// Arguments are JSON encoded, which also makes strings safe to embed.
pub fn call(method: &str, args: &[Value]) -> String {
    let args = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("window.{BRIDGE_GLOBAL} && window.{BRIDGE_GLOBAL}.{method}({args});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_guarded_call() {
        assert_eq!(
            call("seek", &[json!(12.5)]),
            "window.__ovlp && window.__ovlp.seek(12.5);"
        );
        assert_eq!(call("play", &[]), "window.__ovlp && window.__ovlp.play();");
    }

    #[test]
    fn escapes_string_arguments() {
        let script = call("setText", &[json!("log"), json!("it's \"quoted\"</script>")]);
        assert_eq!(
            script,
            r#"window.__ovlp && window.__ovlp.setText("log", "it's \"quoted\"</script>");"#
        );
    }
}
