//! Camera model inspection tool
//!
//! Lists the registered camera models, or initializes and checks a parameter
//! vector for one of them.
//!
//! Usage:
//! ```bash
//! # List all models
//! cargo run --example model_info
//!
//! # Default parameters for a model
//! cargo run --example model_info -- --model OPENCV --width 1920 --height 1080
//!
//! # Check a fitted parameter vector against custom thresholds
//! cargo run --example model_info -- \
//!   --model SIMPLE_RADIAL --params "5.0, 320, 240, 0.01" \
//!   --config samples/bogus_thresholds.yaml
//! ```

use camera_models::{
    camera_models, BogusThresholds, CameraModelDescriptor, CameraParameters, ParamsAssessment,
    Resolution,
};
use clap::Parser;
use log::info;

/// Camera model inspection tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Camera model name, e.g. PINHOLE or OPENCV. Lists all models when omitted.
    #[arg(short = 'm', long)]
    model: Option<String>,

    /// Comma separated parameter values to check
    #[arg(short = 'p', long)]
    params: Option<String>,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Focal length guess used for default parameters; defaults to 1.2 * max(width, height)
    #[arg(short = 'f', long)]
    focal_length: Option<f64>,

    /// YAML file with a `bogus_params` section
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_models(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let models: Vec<&CameraModelDescriptor> = camera_models().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    println!("{:<4} {:<22} {:<7} PARAMS", "ID", "NAME", "COUNT");
    for model in models {
        println!(
            "{:<4} {:<22} {:<7} {}",
            model.id, model.name, model.num_params, model.params_info
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(model_name) = cli.model.as_deref() else {
        return print_models(cli.json);
    };

    let thresholds = match cli.config.as_deref() {
        Some(path) => {
            info!("Loading bogus thresholds from: {}", path);
            BogusThresholds::load_from_yaml(path)?
        }
        None => BogusThresholds::default(),
    };

    let resolution = Resolution::new(cli.width, cli.height);
    let focal_length = cli
        .focal_length
        .unwrap_or(1.2 * resolution.max_dimension() as f64);
    let mut camera = CameraParameters::from_model_name(model_name, focal_length, resolution)?;
    if let Some(params) = cli.params.as_deref() {
        camera.set_params_from_string(params)?;
    }

    let assessment = camera.assess(&thresholds);
    if cli.json {
        let report = serde_json::json!({
            "camera": camera,
            "thresholds": thresholds,
            "assessment": assessment,
            "bogus_principal_point": camera.has_bogus_principal_point(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Model:      {} ({})", camera.model_name(), camera.model_id());
    println!("Layout:     {}", camera.params_info());
    println!("Resolution: {}x{}", resolution.width, resolution.height);
    println!("Params:     {}", camera.params_to_string());
    println!("Thresholds: {:?}", thresholds);
    match assessment {
        ParamsAssessment::Valid => println!("✅ Parameters look plausible"),
        ParamsAssessment::Bogus => println!("❌ Parameters are bogus"),
        other => println!("❌ {:?}", other),
    }
    if camera.has_bogus_principal_point() {
        println!("⚠️  Principal point lies outside the image");
    }

    Ok(())
}
