use clap::Parser;
use std::path::PathBuf;
use subset_tools::{run, RunOpts};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Extract a fixed number of images per partition from a COCO dataset"
)]
struct Args {
    /// Path to the COCO dataset root.
    #[arg(long)]
    coco_dir: PathBuf,
    /// Destination root; removed and recreated before processing.
    #[arg(long)]
    target_dir: PathBuf,
    /// Number of images to select per partition.
    #[arg(long)]
    num_images: usize,
    /// Build the val partition from the train source pool as well.
    #[arg(long, default_value_t = false)]
    copy_val_as_train: bool,
}

impl From<&Args> for RunOpts {
    fn from(args: &Args) -> Self {
        RunOpts {
            coco_dir: args.coco_dir.clone(),
            target_dir: args.target_dir.clone(),
            num_images: args.num_images,
            copy_val_as_train: args.copy_val_as_train,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let summaries = run(&RunOpts::from(&args))?;
    for summary in &summaries {
        println!(
            "Completed {}: {} images, {} annotations",
            summary.partition, summary.images_selected, summary.annotations_selected
        );
    }
    println!("Processing complete!");
    Ok(())
}
