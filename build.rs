use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

fn generate_module_constants(config_path: &str, dest_path: &Path, constants_types: HashMap<&str, &str>) {
    let config_content = fs::read_to_string(config_path)
        .expect("Failed to read analyzer.config.toml");

    let mut constants = String::new();

    for line in config_content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // simple parsing: KEY = VALUE
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            let value_type = constants_types.get(key).unwrap_or(&"usize");

            constants.push_str(&format!(
                "pub const {}: {} = {};\n",
                key, value_type, value
            ));
        }
    }

    fs::write(dest_path, constants).expect("Failed to write analyzer_constants.rs");
    println!("cargo:rerun-if-changed={}", config_path);
}

fn main() {
    let analyzer_constant_types_map = HashMap::from([
        ("DEFAULT_MIN_WORD_LEN", "u8"),
        ("MIN_WORD_LEN_LOWER", "i64"),
        ("MIN_WORD_LEN_UPPER", "i64"),
        ("CONTENT_BANNER_WIDTH", "usize"),
    ]);

    let out_dir = env::var("OUT_DIR").unwrap();

    let analyzer_config_path = "build/analyzer.config.toml";
    let analyzer_output_path = Path::new(&out_dir).join("analyzer_constants.rs");

    generate_module_constants(analyzer_config_path, &analyzer_output_path, analyzer_constant_types_map);
}
