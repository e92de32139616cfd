#![deny(unsafe_code)]
//! CLI binary for the hue-engine palette system.
//!
//! Subcommands:
//! - `generate <primary>`: companion palette from a primary color
//! - `gray <primary>`: tinted neutral ramp
//! - `simulate <color>`: dichromatic color vision check
//! - `compare <colors>...`: pairwise contrast/difference/deltaE matrices
//! - `rainbow <base>`: 360-step hue sweep at the base's L and C

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use hue_engine_core::{convert, OkLch};
use hue_engine_harmony::{select_hues, MixMode};
use hue_engine_vision::Deficiency;
use std::process;

#[derive(Parser)]
#[command(name = "hue-engine", about = "Perceptually balanced palette generation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a companion palette from a primary color.
    Generate {
        /// Primary color (hex or any CSS color string).
        primary: String,

        /// Hue strategy: 0 range-snapped, 1 evenly-rotated, 2/3 octads.
        #[arg(short, long, default_value_t = 0)]
        strategy: u8,

        /// Explicit base hues in degrees, bypassing the strategy.
        #[arg(long, value_delimiter = ',')]
        hues: Option<Vec<f64>>,

        /// Pull of every generated hue toward the primary, 0-100.
        #[arg(short, long, default_value_t = 0.0)]
        mix_level: f64,

        /// Over/under-saturation offset applied to the primary signature.
        #[arg(short, long, default_value_t = 0.0)]
        overshoot: f64,

        /// Hue mixing mode.
        #[arg(long, value_enum, default_value = "perceptual")]
        mix_mode: MixModeArg,

        /// Append pairwise comparison matrices to the output.
        #[arg(short, long)]
        compare: bool,
    },
    /// Generate a tinted neutral ramp.
    Gray {
        /// Primary color the ramp is derived from.
        primary: String,

        /// Tint with the complement of the primary hue.
        #[arg(short, long)]
        complementary: bool,
    },
    /// Simulate how a dichromatic viewer perceives a color.
    Simulate {
        /// Color to check (hex or any CSS color string).
        color: String,

        /// Color vision deficiency to simulate.
        #[arg(short, long, value_enum, default_value = "none")]
        deficiency: DeficiencyArg,

        /// Deficiency severity, 0 (none) to 1 (full dichromacy).
        #[arg(short, long, default_value_t = 1.0)]
        severity: f64,
    },
    /// Pairwise comparison matrices for a list of colors.
    Compare {
        /// Colors to compare (hex or any CSS color strings).
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// A 360-step hue sweep at the base color's lightness and chroma.
    Rainbow {
        /// Base color supplying lightness and chroma.
        base: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MixModeArg {
    Perceptual,
    Angular,
}

impl From<MixModeArg> for MixMode {
    fn from(mode: MixModeArg) -> Self {
        match mode {
            MixModeArg::Perceptual => MixMode::Perceptual,
            MixModeArg::Angular => MixMode::Angular,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeficiencyArg {
    None,
    Protanope,
    Deuteranope,
    Tritanope,
}

impl From<DeficiencyArg> for Option<Deficiency> {
    fn from(arg: DeficiencyArg) -> Self {
        match arg {
            DeficiencyArg::None => None,
            DeficiencyArg::Protanope => Some(Deficiency::Protanope),
            DeficiencyArg::Deuteranope => Some(Deficiency::Deuteranope),
            DeficiencyArg::Tritanope => Some(Deficiency::Tritanope),
        }
    }
}

fn palette_json(palette: &[OkLch]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = palette
        .iter()
        .map(|&c| {
            serde_json::json!({
                "hex": convert::oklch_to_hex(c),
                "css": convert::oklch_to_css(c),
                "oklch": c,
            })
        })
        .collect();
    serde_json::Value::Array(entries)
}

fn print_palette(palette: &[OkLch]) {
    for color in palette {
        println!(
            "{}  {}",
            convert::oklch_to_hex(*color),
            convert::oklch_to_css(*color)
        );
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            primary,
            strategy,
            hues,
            mix_level,
            overshoot,
            mix_mode,
            compare,
        } => {
            if !(0.0..=100.0).contains(&mix_level) {
                return Err(CliError::Input(format!(
                    "--mix-level must be in 0-100, got {mix_level}"
                )));
            }
            let hues = match hues {
                Some(explicit) => explicit,
                None => select_hues(&primary, strategy)?,
            };
            let palette =
                hue_engine_generate::generate(&primary, mix_level, &hues, overshoot, mix_mode.into())?;

            if cli.json {
                let mut out = serde_json::json!({
                    "primary": primary,
                    "hues": hues,
                    "palette": palette_json(&palette),
                });
                if compare {
                    let report = hue_engine_compare::compare(&palette);
                    out["compare"] = serde_json::to_value(&report)?;
                }
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_palette(&palette);
                if compare {
                    let report = hue_engine_compare::compare(&palette);
                    println!("contrast: {:?}", report.contrast);
                    println!("difference: {:?}", report.difference);
                    println!("deltaE: {:?}", report.delta_e);
                }
            }
        }
        Command::Gray {
            primary,
            complementary,
        } => {
            let ramp = hue_engine_generate::generate_gray(&primary, complementary)?;
            if cli.json {
                let out = serde_json::json!({
                    "primary": primary,
                    "complementary": complementary,
                    "ramp": palette_json(&ramp),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_palette(&ramp);
            }
        }
        Command::Simulate {
            color,
            deficiency,
            severity,
        } => {
            if !(0.0..=1.0).contains(&severity) {
                return Err(CliError::Input(format!(
                    "--severity must be in 0-1, got {severity}"
                )));
            }
            let input = convert::parse_color(&color)?;
            let seen = hue_engine_vision::simulate(input, deficiency.into(), severity)?;
            if cli.json {
                let out = serde_json::json!({
                    "input": { "hex": convert::oklch_to_hex(input), "oklch": input },
                    "seen": { "hex": convert::oklch_to_hex(seen), "oklch": seen },
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!(
                    "{} -> {}",
                    convert::oklch_to_hex(input),
                    convert::oklch_to_hex(seen)
                );
            }
        }
        Command::Compare { colors } => {
            let palette: Result<Vec<OkLch>, _> = colors
                .iter()
                .map(|c| convert::parse_color(c))
                .collect();
            let palette = palette?;
            let report = hue_engine_compare::compare(&palette);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&serde_json::to_value(&report)?)?);
            } else {
                println!("contrast: {:?}", report.contrast);
                println!("difference: {:?}", report.difference);
                println!("deltaE: {:?}", report.delta_e);
                for (color, text) in palette.iter().zip(&report.text) {
                    println!(
                        "{} text {}",
                        convert::oklch_to_hex(*color),
                        convert::oklch_to_hex(*text)
                    );
                }
            }
        }
        Command::Rainbow { base } => {
            let anchor = convert::parse_color(&base)?;
            let sweep: Vec<OkLch> = (0..360)
                .map(|deg| OkLch::new(anchor.l, anchor.c, f64::from(deg)))
                .collect();
            if cli.json {
                let out: Vec<String> = sweep.iter().map(|&c| convert::oklch_to_css(c)).collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for color in &sweep {
                    println!("{}", convert::oklch_to_css(*color));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
