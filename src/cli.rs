use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repo-tidy",
    about = "Housekeeping for documentation repos",
    long_about = "repo-tidy keeps a documentation repository in shape. It re-compresses the PNG and JPEG \
                  files of a directory tree in place and escapes pipe characters inside the math \
                  expressions of a markdown page so they are not read as table separators.",
    version,
    after_help = "EXAMPLES:\n  \
    repo-tidy compress\n  \
    repo-tidy compress ./assets -q 70\n  \
    repo-tidy fix-pipes\n  \
    repo-tidy fix-pipes docs/guide/index.md"
)]
pub struct Args {
    #[arg(long, global = true, help = "Only print per-file errors")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Print sizes and a summary for every run"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Re-compress every PNG/JPEG under a directory in place",
        long_about = "Walk a directory recursively and re-save every .png, .jpg and .jpeg file with \
                      optimizing encoder settings. Each file is reported as compressed, skipped \
                      (already optimal) or failed; a failing file never stops the walk."
    )]
    Compress {
        #[arg(
            help = "Root directory to scan (default: current directory)",
            long_help = "Root directory to scan recursively. Symbolic links are not followed. \
                         Defaults to the current working directory."
        )]
        directory: Option<PathBuf>,

        #[arg(
            short = 'q',
            long,
            help = "Compression quality (1-100, default: 80)",
            long_help = "Compression quality from 1 (lowest) to 100 (highest). \
                         JPEG uses it as the encoder quality. For PNG it only selects the \
                         optimisation effort: >=90 uses Zopfli, >=70 high compression, \
                         below that standard compression."
        )]
        quality: Option<u8>,

        #[arg(
            long,
            help = "Keep the original bytes when re-encoding would not shrink a file",
            long_help = "By default every processed file is rewritten, even when the new encoding \
                         is the same size or larger. With this flag such files are left untouched."
        )]
        keep_larger: bool,
    },

    #[command(
        about = "Escape '|' inside math expressions of a markdown file",
        long_about = "Replace '|' with '\\vert' inside $...$ and $$...$$ spans of a markdown file. \
                      Fenced and inline code is never modified. The file is rewritten only when \
                      something changed."
    )]
    FixPipes {
        #[arg(help = "Markdown file to rewrite (default: tech-docs/undergrad_guide/index.md)")]
        file: Option<PathBuf>,
    },
}
