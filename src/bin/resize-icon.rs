//! Generate Android launcher icons from one source image.
//!
//! Run from the project root:
//!   resize-icon [image_file.png]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use resize_icon::generate::{self, Event};
use resize_icon::{IconError, Layout};
use tracing_subscriber::{fmt, EnvFilter};

/// Resize a logo into every Android mipmap density
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image. Defaults to new_logo.png in the current directory.
    #[arg(value_name = "IMAGE")]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let input = generate::resolve_input(args.input);
    if let Err(IconError::SourceNotFound(path)) = generate::check_input(&input) {
        eprintln!("❌ Error: Image file '{}' not found!", path.display());
        eprintln!("\nUsage: resize-icon <image_file.png>");
        eprintln!("Or place your logo image as '{}' in the project root", generate::DEFAULT_INPUT);
        return Ok(ExitCode::from(1));
    }

    let mut started = false;
    generate::run_with(&input, &Layout::default(), |event| match event {
        Event::Opening(path) => println!("📸 Opening image: {}", path.display()),
        Event::ConvertedToRgba => println!("✓ Converted image to RGBA format"),
        Event::SourceSize { width, height } => println!("📐 Original size: {width}x{height}"),
        Event::Created(artifact) => {
            if !started {
                println!("\n🔄 Generating Android icons...\n");
                started = true;
            }
            let size = artifact.size();
            println!(
                "✓ Created {}/{}.png ({size}x{size})",
                artifact.density.folder(),
                artifact.name
            );
        }
        Event::WebLogoUpdated(path) => {
            let size = resize_icon::WEB_LOGO_SIZE;
            println!("\n✓ Updated web logo: {} ({size}x{size})", path.display());
        }
    })?;

    println!("\n✅ All Android icons and web logo have been successfully created!");
    println!("\n📱 Next steps:");
    println!("   1. Rebuild your Android app to see the new icons");
    println!("   2. Clear app cache if icons don't update immediately");

    Ok(ExitCode::SUCCESS)
}
