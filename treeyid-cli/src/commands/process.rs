//! Process command implementation

use super::worker_pool;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{write_all, JsonWriter, PosWriter, PsdWriter, TreeForm};
use crate::progress::TreeProgress;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use treeyid_core::{ProcessedTree, TreeProcessor};

const JSON_DIR: &str = "json";
const PSD_DIR: &str = "psd";
const SCRIPT_PSD_DIR: &str = "psd-yid";
const POS_DIR: &str = "pos";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Prepared files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Directory that receives the json, psd and pos outputs
    #[arg(short, long, value_name = "DIR", required = true)]
    pub output: PathBuf,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        log::info!("Starting leaf processing");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        let outputs = OutputDirs::create(&self.output, config.output.write_script_trees)?;
        let processor = config.processor()?;

        let progress = TreeProgress::start("process", files.len(), quiet);

        let pool = worker_pool(config)?;
        pool.install(|| {
            files
                .par_iter()
                .try_for_each(|path| -> Result<()> {
                    let stem = FileReader::stem(path)?;
                    let processor = processor.with_script_split(config.wants_script_split(&stem));
                    let trees = process_file(&processor, path)?;
                    outputs.write(&stem, &trees, config.output.pretty_json)?;
                    progress.file_done(&stem, trees.len());
                    Ok(())
                })
        })?;
        progress.finish();

        log::info!(
            "processed {} files, {} trees",
            files.len(),
            progress.trees()
        );
        Ok(())
    }
}

/// Run every tree of a prepared file through the processor
pub fn process_file(processor: &TreeProcessor, path: &Path) -> Result<Vec<ProcessedTree>> {
    let content = FileReader::read_text(path)?;
    processor
        .process_lines(&content)
        .with_context(|| format!("Failed to process {}", path.display()))
}

/// Output directories under the output root
struct OutputDirs {
    json: PathBuf,
    psd: PathBuf,
    script_psd: Option<PathBuf>,
    pos: PathBuf,
}

impl OutputDirs {
    fn create(root: &Path, script_trees: bool) -> Result<Self> {
        let dirs = Self {
            json: root.join(JSON_DIR),
            psd: root.join(PSD_DIR),
            script_psd: script_trees.then(|| root.join(SCRIPT_PSD_DIR)),
            pos: root.join(POS_DIR),
        };
        for dir in [&dirs.json, &dirs.psd, &dirs.pos]
            .into_iter()
            .chain(dirs.script_psd.as_ref())
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(dirs)
    }

    fn write(&self, stem: &str, trees: &[ProcessedTree], pretty_json: bool) -> Result<()> {
        let json = create(&self.json.join(format!("{stem}.json")))?;
        write_all(&mut JsonWriter::new(json, pretty_json), trees)?;

        let psd = create(&self.psd.join(format!("{stem}.psd")))?;
        write_all(&mut PsdWriter::new(psd, TreeForm::Romanized), trees)?;

        if let Some(dir) = &self.script_psd {
            let psd = create(&dir.join(format!("{stem}.psd")))?;
            write_all(&mut PsdWriter::new(psd, TreeForm::Script), trees)?;
        }

        let pos = create(&self.pos.join(format!("{stem}.txt")))?;
        write_all(&mut PosWriter::new(pos), trees)
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to write to {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use treeyid_core::ProcessorConfig;

    const PREPARED: &str = "\
notreeid\t(CODE <P_1>)
A,1\t(IP-MAT (PP (P oyf@) (NP (D @n) (N dakh))) (E_S .))
";

    #[test]
    fn test_process_file_and_write_outputs() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("1947-test.txt");
        fs::write(&source, PREPARED).unwrap();

        let processor = TreeProcessor::embedded(
            ProcessorConfig::builder().script_trees(true).build(),
        )
        .unwrap()
        .with_script_split(true);
        let trees = process_file(&processor, &source).unwrap();
        assert_eq!(trees.len(), 2);

        let root = dir.path().join("out");
        let outputs = OutputDirs::create(&root, true).unwrap();
        outputs.write("1947-test", &trees, true).unwrap();

        let psd = fs::read_to_string(root.join("psd/1947-test.psd")).unwrap();
        assert_eq!(
            psd,
            "( (CODE <P_1>))\n( (IP-MAT (PP (P oyf@) (NP (D @n) (N dakh))) (E_S .))(ID A,1))\n"
        );
        let script = fs::read_to_string(root.join("psd-yid/1947-test.psd")).unwrap();
        assert!(script.contains("(P אױפֿ@) (NP (D @ן) (N דאַך))"));

        let pos = fs::read_to_string(root.join("pos/1947-test.txt")).unwrap();
        assert_eq!(pos.lines().count(), 4);
        assert!(pos.starts_with("0\toyf\tP\tאױפֿ\t"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(root.join("json/1947-test.json")).unwrap())
                .unwrap();
        assert_eq!(json[1]["leaves"][0]["pos"], "P~D");
    }

    #[test]
    fn test_no_script_dir_unless_requested() {
        let dir = TempDir::new().unwrap();
        OutputDirs::create(dir.path(), false).unwrap();
        assert!(dir.path().join("json").is_dir());
        assert!(!dir.path().join("psd-yid").exists());
    }

    #[test]
    fn test_malformed_line_names_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bad.txt");
        fs::write(&source, "A,1 (IP-MAT (N kind))\n").unwrap();

        let processor = TreeProcessor::embedded(ProcessorConfig::default()).unwrap();
        let error = process_file(&processor, &source).unwrap_err();
        assert!(error.to_string().contains("Failed to process"));
    }
}
