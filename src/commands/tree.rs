//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which previews what stays
//! visible in every root once the resolved exclusions are applied.
//!
//! ## Functionality
//!
//! - **Visible Tree**: Walks each root, skipping excluded and always-hidden
//!   entries, and prints the remainder hierarchically.
//! - **Depth Control**: Supports `--depth` to limit how far the preview goes.
//!
//! The preview enumerates the visible part of the tree, unlike `resolve`,
//! which only reads the directories it needs. This command is read-only.

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::borrow::Cow;
use std::path::PathBuf;

use path_scope::cache::CachedReader;
use path_scope::config::Config;
use path_scope::defaults::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILENAME};
use path_scope::output::OutputConfig;
use path_scope::path;
use path_scope::patterns::ExcludeMatcher;
use path_scope::reader::DirectoryReader;
use path_scope::resolve::resolve;
use path_scope::suggestions;

/// Preview the tree that stays visible once exclusions are applied
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the .path-scope.yaml configuration file.
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV_VAR, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Maximum depth to display below each root.
    ///
    /// If not specified, displays the full visible tree.
    /// Use 0 to show only the roots, 1 to show their top level, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, output: &OutputConfig) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let tree = build_visible_tree(&config, args.depth.unwrap_or(usize::MAX), output)?;
    print_tree(&tree).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    Ok(())
}

/// Resolve the configured scope and build the visible tree of every root.
fn build_visible_tree(config: &Config, max_depth: usize, output: &OutputConfig) -> Result<TreeNode> {
    let reader = CachedReader::new(config.reader());
    let excluded =
        resolve(&config.path_list(), &reader).map_err(|e| suggestions::resolution_failed(&e))?;
    let matcher = ExcludeMatcher::new(&excluded, &config.hidden)?;

    let children = reader
        .read("")?
        .iter()
        .map(|root| {
            let mut node = build_node(&reader, &matcher, root, max_depth, 0)?;
            node.label = output.dim(&node.label);
            Ok(node)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TreeNode {
        label: format!("{} exclusion(s)", excluded.len()),
        children,
    })
}

/// Build the node for `forest_path`, descending into visible children.
fn build_node<R: DirectoryReader>(
    reader: &R,
    matcher: &ExcludeMatcher,
    forest_path: &str,
    max_depth: usize,
    depth: usize,
) -> Result<TreeNode> {
    let label = forest_path
        .rsplit(path::SEPARATOR)
        .next()
        .unwrap_or(forest_path)
        .to_string();

    if depth >= max_depth {
        return Ok(TreeNode {
            label,
            children: vec![],
        });
    }

    let children = reader
        .read(forest_path)?
        .iter()
        .filter(|child| !matcher.is_hidden(path::relative(child)))
        .map(|child| build_node(reader, matcher, child, max_depth, depth + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(TreeNode { label, children })
}

/// Tree node structure for ptree visualization
#[derive(Clone, Debug)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
