mod leaf;

use crate::{
    error::{FilterError, Result},
    predicate::{CompiledFilter, Predicate},
    schema::{FieldTable, Record},
    settings::CompilerSettings,
};
use model::filter::FilterNode;
use tracing::debug;

/// Compiles filter trees into [`Predicate`]s over records of type `T`.
///
/// All field lookups, operator checks and value coercions happen in
/// [`compile`](Self::compile); the returned predicate cannot fail. The
/// compiler keeps no state between calls and can be shared freely.
pub struct PredicateCompiler<T> {
    fields: FieldTable<T>,
    settings: CompilerSettings,
}

impl<T> PredicateCompiler<T> {
    pub fn new(fields: FieldTable<T>) -> Self {
        Self {
            fields,
            settings: CompilerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: CompilerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn fields(&self) -> &FieldTable<T> {
        &self.fields
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Compile a sibling list into one predicate.
    ///
    /// Siblings fold left to right: the first node seeds the result and each
    /// later node joins it with *its own* `logical_operator`, so
    /// `[a, b(Or), c(And)]` means `(a || b) && c`. The first node's logical
    /// operator is ignored. An empty list compiles to a predicate that
    /// accepts everything.
    ///
    /// Compilation stops at the first invalid node.
    pub fn compile(&self, nodes: &[FilterNode]) -> Result<Predicate<T>> {
        let root = self.compile_list(nodes, "", 0)?;
        debug!("Compiled filter: {}", root);
        Ok(Predicate::new(root))
    }

    fn compile_list(
        &self,
        nodes: &[FilterNode],
        prefix: &str,
        depth: usize,
    ) -> Result<CompiledFilter<T>> {
        if depth > self.settings.max_depth {
            return Err(FilterError::DepthLimitExceeded {
                limit: self.settings.max_depth,
            });
        }

        let mut compiled = nodes.iter().enumerate().map(|(index, node)| {
            let path = format!("{prefix}[{index}]");
            self.compile_node(node, &path, depth)
                .map(|filter| (node.logical_operator, filter))
        });

        let first = match compiled.next() {
            Some(result) => result?.1,
            None => return Ok(CompiledFilter::Always),
        };
        let rest = compiled.collect::<Result<Vec<_>>>()?;

        if rest.is_empty() {
            return Ok(first);
        }
        Ok(CompiledFilter::Chain {
            first: Box::new(first),
            rest,
        })
    }

    fn compile_node(
        &self,
        node: &FilterNode,
        path: &str,
        depth: usize,
    ) -> Result<CompiledFilter<T>> {
        if let Some(children) = node.group_children() {
            debug!("Compiling group at {} with {} children", path, children.len());
            let inner = self.compile_list(children, &format!("{path}.children"), depth + 1)?;
            return Ok(CompiledFilter::Grouped(Box::new(inner)));
        }

        if node.property_name.is_empty() {
            return Err(FilterError::IllFormedNode {
                path: path.to_string(),
            });
        }

        let leaf = self.compile_leaf(node)?;
        debug!("Compiled leaf at {}: {}", path, leaf);
        Ok(CompiledFilter::Leaf(leaf))
    }
}

impl<T: Record> PredicateCompiler<T> {
    /// Compiler using the record type's own field table.
    pub fn for_record() -> Self {
        Self::new(T::field_table())
    }
}

impl<T> Clone for PredicateCompiler<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            settings: self.settings,
        }
    }
}

/// Compile `nodes` for a [`Record`] type with default settings.
pub fn compile<T: Record>(nodes: &[FilterNode]) -> Result<Predicate<T>> {
    PredicateCompiler::<T>::for_record().compile(nodes)
}
