//! Per-tool source-map option placement.

use serde_json::{Map, Value};

/// Returns where a tool expects its source-map switch and the value that
/// turns it on: a property path into the tool's options record plus the
/// enabling value.
///
/// Most tools take a boolean; less takes an options object.
pub fn source_map_property(tool: &str) -> Option<(&'static [&'static str], Value)> {
    let (path, value): (&[&str], Value) = match tool {
        "babel" => (&["sourceMaps"], Value::Bool(true)),
        "typescript" => (&["compilerOptions", "sourceMap"], Value::Bool(true)),
        "scss" => (&["sourceMap"], Value::Bool(true)),
        "less" => (&["sourceMap"], Value::Object(Map::new())),
        "stylus" => (&["sourcemap"], Value::Bool(true)),
        "postcss" => (&["map"], Value::Bool(true)),
        "coffeescript" => (&["sourceMap"], Value::Bool(true)),
        "globalStyle" => (&["sourceMap"], Value::Bool(true)),
        _ => return None,
    };
    Some((path, value))
}
