use thiserror::Error;

/// Top-level error type for all genvy operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration discovery and shape errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not find genvy.json in this or any parent directory")]
    NotFound,

    #[error("configuration file must contain a files block")]
    MissingFilesBlock,

    #[error("target environment must be specified if an environment list is provided")]
    MissingTargetEnv,

    #[error("target environment {env} is not listed in environment list {list}")]
    EnvNotListed { env: String, list: String },

    #[error("source file not found: {0}")]
    SourceNotFound(String),
}

/// Value definition errors.
///
/// Each message embeds the offending definition serialized as JSON so the
/// failing entry can be located in the source block.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error(
        "non-primitive values must specify exactly one of the following keys: \
         value, secret, expr, if_env\n{def}"
    )]
    MultipleKeys { def: String },

    #[error("cannot use named values in configuration\n{def}")]
    NamedInConfig { def: String },

    #[error("named value \"{name}\" is not defined in the values block\n{def}")]
    UnknownName { def: String, name: String },

    #[error("no value specified for environment \"{env}\"\n{def}")]
    NoEnvBranch { def: String, env: String },

    #[error("invalid secret definition\n{def}")]
    InvalidSecretSpec { def: String },

    #[error("secret definition has no usable character ranges\n{def}")]
    NoUsableRanges { def: String },
}

/// Arithmetic expression errors.
#[derive(Error, Debug)]
pub enum ExprError {
    #[error("invalid expression: {expr:?}")]
    ForbiddenCharacter { expr: String },

    #[error("malformed expression {expr:?}: {reason}")]
    Malformed { expr: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
