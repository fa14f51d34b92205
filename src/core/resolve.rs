//! Recursive value-definition resolution.
//!
//! A value definition is a JSON primitive, or an object carrying exactly one
//! discriminator key: `value` (named reference), `if_env` (per-environment
//! branch), `expr` (arithmetic expression), or `secret` (generated secret).
//! Resolution is a single recursive dispatch; `if_env` branches re-enter it,
//! so a branch may itself hold a secret, an expression, or another branch.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::core::expr::ExpressionEvaluator;
use crate::core::range::{self, CharRange};
use crate::core::secret::{SecretGenerator, SecretIdentity, DEFAULT_RANGES};
use crate::error::{Result, ValueError};

/// Resolved key → string map, insertion-ordered.
pub type FlatValueMap = IndexMap<String, String>;

/// Borrowed tagged view of one value definition.
enum ValueKind<'a> {
    Literal(&'a Value),
    Named(&'a str),
    IfEnv(&'a Map<String, Value>),
    Expr(&'a str),
    Secret(&'a Value),
    /// Unrecognized shape: resolves to the string "null", never an error.
    Absent,
}

/// Resolves value definitions against the run's target environment and,
/// inside an output file's source block, the named values resolved from the
/// configuration.
pub struct Resolver<'a> {
    target_env: &'a str,
    /// Named-value context. Absent while the configuration's own values
    /// block is being resolved, which makes `value` references an error.
    named: Option<&'a FlatValueMap>,
    /// Output file name, used to namespace secret identities.
    file: Option<&'a str>,
    secrets: &'a mut SecretGenerator,
    exprs: &'a mut ExpressionEvaluator,
}

impl<'a> Resolver<'a> {
    /// Resolver for the configuration's top-level values block.
    pub fn for_config(
        target_env: &'a str,
        secrets: &'a mut SecretGenerator,
        exprs: &'a mut ExpressionEvaluator,
    ) -> Self {
        Self {
            target_env,
            named: None,
            file: None,
            secrets,
            exprs,
        }
    }

    /// Resolver for one output file's source block.
    pub fn for_file(
        file: &'a str,
        named: &'a FlatValueMap,
        target_env: &'a str,
        secrets: &'a mut SecretGenerator,
        exprs: &'a mut ExpressionEvaluator,
    ) -> Self {
        Self {
            target_env,
            named: Some(named),
            file: Some(file),
            secrets,
            exprs,
        }
    }

    /// Resolve a whole block in declaration order.
    pub fn resolve_block(&mut self, block: &IndexMap<String, Value>) -> Result<FlatValueMap> {
        let mut resolved = FlatValueMap::with_capacity(block.len());
        for (key, def) in block {
            let value = self.resolve(key, def)?;
            resolved.insert(key.clone(), value);
        }
        Ok(resolved)
    }

    /// Resolve one definition to its final string.
    pub fn resolve(&mut self, key: &str, def: &Value) -> Result<String> {
        match classify(def)? {
            ValueKind::Literal(value) => Ok(render_literal(value)),
            ValueKind::Named(name) => self.resolve_named(def, name),
            ValueKind::IfEnv(branches) => self.resolve_if_env(key, def, branches),
            ValueKind::Expr(expr) => Ok(self.exprs.evaluate(expr)?.to_string()),
            ValueKind::Secret(spec) => self.resolve_secret(key, def, spec),
            ValueKind::Absent => Ok("null".to_string()),
        }
    }

    fn resolve_named(&self, def: &Value, name: &str) -> Result<String> {
        let Some(named) = self.named else {
            return Err(ValueError::NamedInConfig {
                def: def.to_string(),
            }
            .into());
        };
        match named.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(ValueError::UnknownName {
                def: def.to_string(),
                name: name.to_string(),
            }
            .into()),
        }
    }

    fn resolve_if_env(
        &mut self,
        key: &str,
        def: &Value,
        branches: &Map<String, Value>,
    ) -> Result<String> {
        match branches.get(self.target_env) {
            Some(nested) => self.resolve(key, nested),
            None => Err(ValueError::NoEnvBranch {
                def: def.to_string(),
                env: self.target_env.to_string(),
            }
            .into()),
        }
    }

    fn resolve_secret(&mut self, key: &str, def: &Value, spec: &Value) -> Result<String> {
        let (length, ranges) = parse_secret_spec(def, spec)?;
        let identity = SecretIdentity {
            file: self.file,
            key,
            env: self.target_env,
        };
        Ok(self.secrets.generate(&identity, length, &ranges))
    }
}

fn classify(def: &Value) -> Result<ValueKind<'_>> {
    let object = match def {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            return Ok(ValueKind::Literal(def))
        }
        Value::Object(object) => object,
        // JSON null and arrays carry no definition shape.
        Value::Null | Value::Array(_) => return Ok(ValueKind::Absent),
    };

    if object.len() > 1 {
        return Err(ValueError::MultipleKeys {
            def: def.to_string(),
        }
        .into());
    }

    if let Some(name) = object.get("value").and_then(Value::as_str) {
        return Ok(ValueKind::Named(name));
    }
    if let Some(branches) = object.get("if_env").and_then(Value::as_object) {
        return Ok(ValueKind::IfEnv(branches));
    }
    if let Some(expr) = object.get("expr").and_then(Value::as_str) {
        return Ok(ValueKind::Expr(expr));
    }
    if let Some(spec) = object.get("secret") {
        return Ok(ValueKind::Secret(spec));
    }
    Ok(ValueKind::Absent)
}

fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // Number and Bool Display already match the expected rendering.
        other => other.to_string(),
    }
}

/// Parse a secret spec: a bare length, or `[length, ...rangeTokens]`.
///
/// Invalid tokens are dropped silently, but a spec whose token list yields
/// zero usable ranges is an error rather than an empty weight table.
fn parse_secret_spec(def: &Value, spec: &Value) -> Result<(usize, Vec<CharRange>)> {
    match spec {
        Value::Number(_) => Ok((spec_length(def, spec)?, DEFAULT_RANGES.to_vec())),
        Value::Array(items) => {
            let Some((head, tokens)) = items.split_first() else {
                return Err(invalid_spec(def));
            };
            let length = spec_length(def, head)?;

            let ranges: Vec<CharRange> = tokens
                .iter()
                .filter_map(Value::as_str)
                .filter_map(range::parse)
                .collect();
            if ranges.is_empty() {
                return Err(ValueError::NoUsableRanges {
                    def: def.to_string(),
                }
                .into());
            }
            Ok((length, ranges))
        }
        _ => Err(invalid_spec(def)),
    }
}

fn spec_length(def: &Value, length: &Value) -> Result<usize> {
    match length.as_u64() {
        Some(length) => Ok(length as usize),
        None => Err(invalid_spec(def)),
    }
}

fn invalid_spec(def: &Value) -> crate::error::Error {
    ValueError::InvalidSecretSpec {
        def: def.to_string(),
    }
    .into()
}
