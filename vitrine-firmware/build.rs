//! Build script for vitrine-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates widget.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Expected type of a configuration value
#[derive(Clone, Copy)]
enum Kind {
    /// Integer within an inclusive range
    Int(i64, i64),
    Bool,
    /// `"#rrggbb"` or `"0xNNNN"`
    Color,
}

/// Every accepted `(section, key, kind)`
const SCHEMA: &[(&str, &str, Kind)] = &[
    ("ball", "radius", Kind::Int(1, 32)),
    ("ball", "velocity_x", Kind::Int(-128, 127)),
    ("ball", "velocity_y", Kind::Int(-128, 127)),
    ("ball", "start_color", Kind::Color),
    ("mandelbrot", "lines_per_tick", Kind::Int(1, 119)),
    ("timing", "frame_interval_ms", Kind::Int(1, u32::MAX as i64)),
    ("timing", "clock_refresh_ms", Kind::Int(1, u32::MAX as i64)),
    ("timing", "debounce_ms", Kind::Int(0, u32::MAX as i64)),
    ("clock", "tz_offset_hours", Kind::Int(-12, 14)),
    ("clock", "sync_baud_rate", Kind::Int(1, u32::MAX as i64)),
    ("display", "spi_frequency_hz", Kind::Int(1, u32::MAX as i64)),
    ("display", "backlight", Kind::Bool),
    ("theme", "background", Kind::Color),
    ("theme", "border", Kind::Color),
    ("theme", "text", Kind::Color),
];

/// Validate widget.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=widget.toml");

    let config_path = Path::new("widget.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: widget.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds widget.toml from the vitrine-firmware       ║\n\
            ║  directory. An empty file selects all defaults.                  ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read widget.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in widget.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = validate_tables(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in widget.toml                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=widget.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check sections, keys, types and ranges
///
/// The firmware's own parser only understands flat sections of scalars,
/// so nested tables and arrays are rejected here too.
fn validate_tables(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = config.as_table() else {
        return vec!["top level is not a table".to_string()];
    };

    for (section, value) in root {
        let Some(table) = value.as_table() else {
            errors.push(format!("'{}' must be a [section]", section));
            continue;
        };
        if !SCHEMA.iter().any(|(s, _, _)| s == section) {
            errors.push(format!("unknown section [{}]", section));
            continue;
        }

        for (key, value) in table {
            match SCHEMA.iter().find(|(s, k, _)| s == section && k == key) {
                Some(&(_, _, kind)) => {
                    if let Err(msg) = check_value(value, kind) {
                        errors.push(format!("{}.{}: {}", section, key, msg));
                    }
                }
                None => errors.push(format!("unknown key {}.{}", section, key)),
            }
        }
    }

    errors
}

fn check_value(value: &toml::Value, kind: Kind) -> Result<(), String> {
    match kind {
        Kind::Int(min, max) => {
            let v = value.as_integer().ok_or("expected an integer")?;
            if v < min || v > max {
                return Err(format!("{} outside {}..={}", v, min, max));
            }
        }
        Kind::Bool => {
            value.as_bool().ok_or("expected true or false")?;
        }
        Kind::Color => {
            let s = value.as_str().ok_or("expected a color string")?;
            if !is_color(s) {
                return Err(format!("'{}' is not \"#rrggbb\" or \"0xNNNN\"", s));
            }
        }
    }
    Ok(())
}

fn is_color(s: &str) -> bool {
    let hex = |d: &str| d.chars().all(|c| c.is_ascii_hexdigit());
    if let Some(digits) = s.strip_prefix('#') {
        digits.len() == 6 && hex(digits)
    } else if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (1..=4).contains(&digits.len()) && hex(digits)
    } else {
        false
    }
}
