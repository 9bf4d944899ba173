//! Build automation for appgw-template
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - build: Build the project
//! - test: Run tests
//! - dist: Create distribution packages
//! - ci: Run CI checks
//! - render: Render the demo API models in demos/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BINARY_NAME: &str = "appgw-template";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for appgw-template")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project
    Build {
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Create distribution packages
    Dist {
        /// Target triple (e.g., x86_64-unknown-linux-gnu)
        #[arg(long)]
        target: Option<String>,
    },
    /// Run CI checks (format, clippy, test, render)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
    /// Generate the gateway resource for every demo API model
    Render {
        /// Directory to write the rendered resources to
        #[arg(long, default_value = "target/demos")]
        out_dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    let root = project_root()?;
    sh.change_dir(&root);

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { integration } => test(&sh, integration),
        Commands::Dist { target } => dist(&sh, &root, target),
        Commands::Ci => ci(&sh, &root),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
        Commands::Render { out_dir } => render(&sh, &root, &out_dir),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🔨 Building {}...", BINARY_NAME);

    if release {
        cmd!(sh, "cargo build --release").run()?;
        println!("✅ Release build completed: target/release/{}", BINARY_NAME);
    } else {
        cmd!(sh, "cargo build").run()?;
        println!("✅ Debug build completed: target/debug/{}", BINARY_NAME);
    }

    Ok(())
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    println!("🧪 Running tests...");

    if integration {
        cmd!(sh, "cargo test --test '*'").run()?;
    } else {
        cmd!(sh, "cargo test --all").run()?;
    }

    println!("✅ All tests passed");
    Ok(())
}

fn dist(sh: &Shell, root: &Path, target: Option<String>) -> Result<()> {
    println!("📦 Creating distribution package...");

    if let Some(ref target_triple) = target {
        cmd!(sh, "cargo build --release --target {target_triple}").run()?;
    } else {
        cmd!(sh, "cargo build --release").run()?;
    }

    let dist_dir = root.join("dist");
    sh.create_dir(&dist_dir)?;

    let binary_src = match target {
        Some(ref target_triple) => {
            root.join(format!("target/{}/release/{}", target_triple, BINARY_NAME))
        }
        None => root.join(format!("target/release/{}", BINARY_NAME)),
    };
    sh.copy_file(&binary_src, dist_dir.join(BINARY_NAME))?;

    let version = env!("CARGO_PKG_VERSION");
    let archive_name = format!("{}-{}.tar.gz", BINARY_NAME, version);

    cmd!(sh, "tar -czf {archive_name} -C dist {BINARY_NAME}")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created: {}", archive_name);
    Ok(())
}

fn ci(sh: &Shell, root: &Path) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh, false)?;

    println!("\n🖨️  Rendering demos...");
    render(sh, root, "target/demos")?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
        println!("✅ Code formatting is correct");
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
        println!("✅ Code formatted");
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(
        sh,
        "cargo clippy --all-targets --all-features -- -D warnings"
    )
    .run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn render(sh: &Shell, root: &Path, out_dir: &str) -> Result<()> {
    let demos_dir = root.join("demos");
    let out_dir = root.join(out_dir);
    sh.create_dir(&out_dir)?;

    let mut demos: Vec<PathBuf> = sh
        .read_dir(&demos_dir)
        .with_context(|| format!("Failed to list {}", demos_dir.display()))?
        .into_iter()
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("json" | "yaml" | "yml" | "toml")
            )
        })
        .collect();
    demos.sort();

    for demo in &demos {
        let stem = demo
            .file_stem()
            .and_then(|s| s.to_str())
            .context("Demo file name is not valid UTF-8")?;
        let output = out_dir.join(format!("{}.json", stem));

        println!("🖨️  {} -> {}", demo.display(), output.display());
        cmd!(
            sh,
            "cargo run --quiet --bin {BINARY_NAME} -- generate --config-file {demo} --output {output}"
        )
        .run()
        .with_context(|| format!("Failed to render {}", demo.display()))?;
    }

    println!("✅ Rendered {} demo(s) into {}", demos.len(), out_dir.display());
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
}
