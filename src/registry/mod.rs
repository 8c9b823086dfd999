//! Named parser registry.
//!
//! Maps a parser name (by default the statement's seed keyword: `select`,
//! `create`, `insert`, `alter`) to a shared parser instance. The map is
//! guarded by an [`RwLock`]: lookups and parses take the read lock, while
//! registration takes the write lock. [`ParserRegistry::get_or_register`]
//! checks and inserts under a single write lock, so concurrent first use of
//! a name constructs at most one parser.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::error::{ParseError, Result};
use crate::keyword::StatementKind;
use crate::parser::{AlterParser, CreateParser, DynParser, InsertParser, ParsedStatement, SelectParser};

static GLOBAL: LazyLock<ParserRegistry> = LazyLock::new(ParserRegistry::with_builtin);

type ParserMap = HashMap<String, Arc<dyn DynParser>>;

/// A thread-safe lookup of parsers by name. Names are ASCII
/// case-insensitive.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: RwLock<ParserMap>,
}

impl ParserRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the four built-in parsers under their statement
    /// names.
    pub fn with_builtin() -> Self {
        let mut parsers: ParserMap = HashMap::new();
        parsers.insert(StatementKind::Select.name().to_string(), Arc::new(SelectParser));
        parsers.insert(StatementKind::Create.name().to_string(), Arc::new(CreateParser));
        parsers.insert(StatementKind::Insert.name().to_string(), Arc::new(InsertParser));
        parsers.insert(StatementKind::Alter.name().to_string(), Arc::new(AlterParser));
        ParserRegistry {
            parsers: RwLock::new(parsers),
        }
    }

    /// The process-wide registry, created with the built-in parsers on
    /// first use.
    pub fn global() -> &'static ParserRegistry {
        &GLOBAL
    }

    /// Register `parser` under `name`, returning the parser it replaced.
    pub fn register(
        &self,
        name: &str,
        parser: Arc<dyn DynParser>,
    ) -> Result<Option<Arc<dyn DynParser>>> {
        let key = name.to_ascii_lowercase();
        debug!("registering {} parser as {:?}", parser.kind(), key);
        Ok(self.write()?.insert(key, parser))
    }

    /// The parser registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn DynParser>> {
        self.read()?
            .get(&name.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| ParseError::UnknownParser(name.to_string()))
    }

    pub fn unregister(&self, name: &str) -> Result<Option<Arc<dyn DynParser>>> {
        Ok(self.write()?.remove(&name.to_ascii_lowercase()))
    }

    /// Return the parser registered under `name`, or register the one built
    /// by `init` and return it.
    pub fn get_or_register<F>(&self, name: &str, init: F) -> Result<Arc<dyn DynParser>>
    where
        F: FnOnce() -> Arc<dyn DynParser>,
    {
        let key = name.to_ascii_lowercase();
        let mut parsers = self.write()?;
        let parser = parsers.entry(key).or_insert_with_key(|key| {
            let parser = init();
            debug!("registering {} parser as {:?}", parser.kind(), key);
            parser
        });
        Ok(Arc::clone(parser))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.read()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Parse `sql` with the parser registered under `name`.
    pub fn parse(&self, name: &str, sql: &str) -> Result<ParsedStatement> {
        // Release the lock before parsing.
        let parser = self.get(name)?;
        parser.parse(sql)
    }

    /// Parse `sql` with the parser named by its leading keyword.
    pub fn parse_statement(&self, sql: &str) -> Result<ParsedStatement> {
        match StatementKind::detect(sql) {
            Some(kind) => self.parse(kind.name(), sql),
            None => {
                let word = sql.split_whitespace().next().unwrap_or_default();
                Err(ParseError::UnknownParser(word.to_string()))
            }
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ParserMap>> {
        self.parsers
            .read()
            .map_err(|_| ParseError::Internal("registry lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ParserMap>> {
        self.parsers
            .write()
            .map_err(|_| ParseError::Internal("registry lock poisoned".into()))
    }
}
