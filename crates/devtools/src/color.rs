use crate::prelude::{println, *};
use colored::Colorize;
use devtools_core::color::{parse_color, ColorOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "color")]
#[command(about = "Convert colors between hex, RGB, and HSL")]
pub struct App {
    #[clap(flatten)]
    pub options: ConvertOptions,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Color in any supported notation: #rrggbb, rgb(r, g, b), hsl(h, s%, l%)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    let color = parse_color(&app.options.color).map_err(|e| eyre!(e))?;

    if app.options.json {
        println!("{}", serde_json::to_string_pretty(&color)?);
    } else {
        print!("{}", format_color_text(&color));
    }

    Ok(())
}

fn format_color_text(color: &ColorOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}: {}\n", "Hex".green(), color.hex));
    result.push_str(&format!("{}: {}\n", "RGB".green(), color.rgb_css));
    result.push_str(&format!("{}: {}\n", "HSL".green(), color.hsl_css));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_color_text_all_notations() {
        let color = parse_color("#ff0000").unwrap();

        let formatted = format_color_text(&color);

        assert!(formatted.contains("#ff0000"));
        assert!(formatted.contains("rgb(255, 0, 0)"));
        assert!(formatted.contains("hsl(0, 100%, 50%)"));
    }

    #[test]
    fn test_json_output_shape() {
        let color = parse_color("rgb(0, 128, 255)").unwrap();

        let json = serde_json::to_string_pretty(&color).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["hex"], "#0080ff");
        assert_eq!(parsed["r"], 0);
        assert_eq!(parsed["b"], 255);
    }
}
