//! Config document abstraction layer.
//!
//! `ConfigDocument` and `ParseNode` wrap the `kdl` crate types so the rest of
//! the config module never touches KDL directly.

/// Parsed KDL document paired with its source text.
pub(super) struct ConfigDocument {
    doc: kdl::KdlDocument,
    source: String,
}

/// Single KDL node with source context for line-number reporting.
pub(super) struct ParseNode<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

impl ConfigDocument {
    /// Parse a KDL source string into a document.
    pub(super) fn parse(source: &str) -> Result<Self, super::ConfigError> {
        let doc: kdl::KdlDocument = source
            .parse()
            .map_err(|e: kdl::KdlError| super::ConfigError::ParseError(e.to_string()))?;
        Ok(Self {
            doc,
            source: source.to_string(),
        })
    }

    /// Load and parse a KDL config file.
    pub(super) fn load(path: &std::path::Path) -> Result<Self, super::ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                super::ConfigError::NotFound(path.to_path_buf())
            } else {
                super::ConfigError::ReadError(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Children of the named top-level block, e.g. `check { … }`.
    pub(super) fn section(&self, name: &str) -> Option<Vec<ParseNode<'_>>> {
        self.doc.get(name).and_then(|n| n.children()).map(|doc| {
            doc.nodes()
                .iter()
                .map(|node| ParseNode {
                    node,
                    source: &self.source,
                })
                .collect()
        })
    }

    /// Top-level nodes, for rejecting unknown sections.
    pub(super) fn top_level(&self) -> Vec<ParseNode<'_>> {
        self.doc
            .nodes()
            .iter()
            .map(|node| ParseNode {
                node,
                source: &self.source,
            })
            .collect()
    }
}

impl<'a> ParseNode<'a> {
    pub(super) fn name(&self) -> &str {
        self.node.name().value()
    }

    /// The node's single string argument, if it has exactly one entry.
    pub(super) fn single_string(&self) -> Option<&'a str> {
        match self.node.entries() {
            [entry] => entry.value().as_string(),
            _ => None,
        }
    }

    /// 1-based line number of this node in the original source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset();
        self.source[..offset.min(self.source.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1
    }
}
