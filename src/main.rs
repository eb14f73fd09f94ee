use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

use identicon::application::GetUserIconUseCase;
use identicon::application::dto::{IconMetadata, IconOptions};
use identicon::domain::entities::{ContentHash, UserId};
use identicon::domain::repositories::{IconWriter, WriteOptions};
use identicon::domain::services::IdenticonGenerator;
use identicon::formats::png::inspect_png;
use identicon::infrastructure::encoding::PngIconEncoder;
use identicon::infrastructure::persistence::{
    DirectoryAccountImageStore, InMemoryAccountImageStore, LocalIconWriter,
};
use identicon::presentation::cli::{BATCH_CHUNK_SIZE, Cli, Commands, parse_user_range};
use identicon::{BitPattern, Rgb};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Generate {
            user_id,
            output,
            overwrite,
            json,
        } => run_generate(user_id, &output, overwrite, json),
        Commands::Batch {
            from,
            to,
            output,
            overwrite,
        } => run_batch(from, to, &output, overwrite),
        Commands::Hash { user_id } => {
            println!("{}", ContentHash::of_user(user_id));
            Ok(())
        }
        Commands::Pattern { user_id } => {
            run_pattern(user_id);
            Ok(())
        }
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Icon {
            user_id,
            store,
            default_icon,
            output,
            overwrite,
        } => run_icon(user_id, store, default_icon, output, overwrite),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn generator() -> IdenticonGenerator<PngIconEncoder> {
    IdenticonGenerator::new(PngIconEncoder::new())
}

fn run_generate(user_id: UserId, output: &Path, overwrite: bool, json: bool) -> Result<()> {
    let icon = generator()
        .generate_identicon(user_id)
        .with_context(|| format!("Failed to generate identicon for user {user_id}"))?;

    if json {
        let metadata = IconMetadata::for_identicon(user_id, &icon);
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    let writer = LocalIconWriter::new(output)
        .with_context(|| format!("Failed to open output directory {}", output.display()))?;
    let result = writer
        .write(&icon, &WriteOptions { overwrite })
        .with_context(|| format!("Failed to write {}", icon.file_name()))?;

    println!("{} ({} bytes)", result.saved_path.display(), result.saved_size);
    Ok(())
}

fn run_batch(from: UserId, to: UserId, output: &Path, overwrite: bool) -> Result<()> {
    let user_ids = parse_user_range(from, to).map_err(|e| anyhow!(e))?;

    let writer = LocalIconWriter::new(output)
        .with_context(|| format!("Failed to open output directory {}", output.display()))?;
    let options = WriteOptions { overwrite };

    tracing::info!("Generating {} identicons into {}", user_ids.len(), output.display());

    let mut failed = 0usize;
    generator().generate_chunked(&user_ids, BATCH_CHUNK_SIZE, |user_id, result| {
        let written = result
            .map_err(anyhow::Error::from)
            .and_then(|icon| writer.write(&icon, &options).map_err(anyhow::Error::from));

        if let Err(e) = written {
            tracing::warn!(user_id, "Skipped: {}", e);
            failed += 1;
        }
    });

    println!(
        "Wrote {} identicons ({} bytes) to {}",
        writer.files_written(),
        writer.bytes_written(),
        output.display()
    );
    if failed > 0 {
        println!("Failed: {failed}");
    }
    Ok(())
}

fn run_pattern(user_id: UserId) {
    let hash = ContentHash::of_user(user_id);
    let pattern = BitPattern::from_hash(&hash);
    let color = Rgb::from_hash(&hash);

    println!("user:  {user_id}");
    println!("hash:  {hash}");
    println!("color: {color}");
    println!("{pattern}");
}

fn run_inspect(file: &Path) -> Result<()> {
    let data = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let info =
        inspect_png(&data).ok_or_else(|| anyhow!("{} is not a PNG file", file.display()))?;

    println!(
        "{}x{}, bit depth {}, color type {}",
        info.width, info.height, info.bit_depth, info.color_type
    );
    println!("interlaced:  {}", info.interlaced);
    println!("chunks:      {}", info.chunk_count);
    println!("IDAT chunks: {} ({} bytes)", info.idat_count, info.idat_total_bytes);
    println!("CRCs valid:  {}", info.crc_valid);
    println!("IEND:        {}", info.has_iend);

    if !info.is_well_formed() {
        return Err(anyhow!("{} is malformed", file.display()));
    }
    Ok(())
}

fn run_icon(
    user_id: UserId,
    store: Option<PathBuf>,
    default_icon: Option<PathBuf>,
    output: PathBuf,
    overwrite: bool,
) -> Result<()> {
    let mut options = IconOptions::new(output).with_cache_capacity(0);
    if let Some(path) = default_icon {
        options = options.with_default_icon(path);
    }
    if overwrite {
        options = options.overwriting();
    }

    let response = match store {
        Some(root) => {
            GetUserIconUseCase::new(DirectoryAccountImageStore::new(root), generator(), &options)
                .execute(user_id)
        }
        None => GetUserIconUseCase::new(InMemoryAccountImageStore::new(), generator(), &options)
            .execute(user_id),
    };

    for (name, value) in response.headers() {
        println!("{name}: {value}");
    }

    if response.icon.is_empty() {
        return Err(anyhow!("No icon available for user {user_id}"));
    }

    let writer = LocalIconWriter::new(&options.output_dir).with_context(|| {
        format!("Failed to open output directory {}", options.output_dir.display())
    })?;
    let result = writer
        .write(&response.icon, &WriteOptions { overwrite: options.overwrite })
        .with_context(|| format!("Failed to write {}", response.icon.file_name()))?;

    println!();
    println!("{} icon saved to {}", response.source, result.saved_path.display());
    Ok(())
}
