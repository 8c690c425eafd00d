//! boxforge CLI - generate and inspect box meshes without the server

use anyhow::{Context, Result};
use boxforge_core::fmt_real;
use boxforge_core::prelude::*;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boxforge")]
#[command(about = "Box meshes from dimensions, as OBJ/MTL", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a box as an OBJ + MTL pair
    Generate {
        /// Width in centimeters
        #[arg(short = 'x', long, default_value = "1.0", allow_negative_numbers = true)]
        width: f64,

        /// Height in centimeters
        #[arg(short = 'y', long, default_value = "1.0", allow_negative_numbers = true)]
        height: f64,

        /// Depth in centimeters
        #[arg(short = 'z', long, default_value = "1.0", allow_negative_numbers = true)]
        depth: f64,

        /// Diffuse color as r,g,b
        #[arg(short, long, default_value = "0,1,0")]
        color: Color,

        /// Export profile (minimal or extended)
        #[arg(short, long, default_value = "extended")]
        profile: ExportProfile,

        /// Output OBJ file (default: a unique name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also bundle both files into a zip next to the OBJ
        #[arg(long)]
        zip: bool,

        /// Reject zero or negative dimensions
        #[arg(long)]
        require_positive: bool,
    },

    /// Read an OBJ (and the MTL it references) and print what box it holds
    Inspect {
        /// OBJ file to inspect
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            depth,
            color,
            profile,
            output,
            zip,
            require_positive,
        } => {
            let policy = if require_positive {
                DimensionPolicy::RequirePositive
            } else {
                DimensionPolicy::Permissive
            };
            run_generate(
                &Dimensions::new(width, height, depth),
                color,
                profile,
                output,
                zip,
                policy,
            )?;
        }
        Commands::Inspect { input } => {
            run_inspect(&input)?;
        }
    }

    Ok(())
}

fn run_generate(
    dims: &Dimensions,
    color: Color,
    profile: ExportProfile,
    output: Option<PathBuf>,
    zip: bool,
    policy: DimensionPolicy,
) -> Result<()> {
    dims.validate(policy)?;

    let obj_path = output.unwrap_or_else(|| ExportName::unique(dims).obj_path(Path::new(".")));
    if let Some(parent) = obj_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let result = export_box(dims, color, profile, &obj_path)
        .with_context(|| format!("export {}", obj_path.display()))?;
    tracing::debug!(profile = %result.profile, "export finished");
    println!("{}", result);

    if zip {
        let zip_path = obj_path.with_extension("zip");
        bundle_archive(&result.artifacts(), &zip_path)
            .with_context(|| format!("write archive {}", zip_path.display()))?;
        println!("Bundled {}", zip_path.display());
    }

    Ok(())
}

fn run_inspect(input: &Path) -> Result<()> {
    let loaded = load_box(input).with_context(|| format!("read {}", input.display()))?;
    let d = loaded.dimensions;

    println!("File:       {}", input.display());
    if let Some(mtl) = &loaded.mtl_path {
        println!("Material:   {} ({})", mtl.display(), loaded.material.name);
    }
    println!(
        "Dimensions: {}cm x {}cm x {}cm",
        fmt_real(d.width),
        fmt_real(d.height),
        fmt_real(d.depth)
    );
    println!("Color:      {}", loaded.color);
    println!("Profile:    {}", loaded.profile);
    println!(
        "Mesh:       {} vertices, {} triangles",
        loaded.mesh.vertex_count(),
        loaded.mesh.triangle_count()
    );
    if let Some(shininess) = loaded.material.shininess {
        println!("Shininess:  {}", shininess);
    }

    Ok(())
}
