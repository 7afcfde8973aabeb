//! Tokenize command implementation.
//!
//! Runs the Jack tokenizer over a source file or a directory of source
//! files and writes the token stream to standard output. Settings are
//! layered: command-line options override the configuration file, which
//! overrides the built-in defaults.

use std::borrow::Cow;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use jackc_lex::{Token, Tokenizer, TokenizerConfig};
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::common::{
    error_messages, output_messages, parse_format, parse_identifier_rule, parse_line_numbering,
    OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::Config;
use crate::error::{JacktError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Source file or directory.
    pub path: PathBuf,
    /// Output format name.
    pub format: Option<String>,
    /// Source extension used for directories.
    pub extension: Option<String>,
    /// Line numbering policy name.
    pub line_numbering: Option<String>,
    /// Identifier rule name.
    pub identifiers: Option<String>,
    /// Print a header before each file's tokens.
    pub by_file: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Settings after layering arguments over the configuration.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    tokenizer: TokenizerConfig,
    format: OutputFormat,
    by_file: bool,
}

/// Tokenize command handler.
///
/// The command output is the number of tokens produced; the number of
/// files read is reported as items processed.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: Config,
}

impl TokenizeCommand {
    /// Create a tokenize command that layers `args` over `config`.
    pub fn with_config(args: TokenizeArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<CommandResult<usize>> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let result = self.run_to(&mut out)?;
        out.flush()?;
        Ok(result)
    }

    /// Execute the command, writing the token stream to `out`.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<CommandResult<usize>> {
        let start_time = Instant::now();
        let settings = self.resolve_settings()?;
        self.validate_input()?;

        debug!(
            path = %self.args.path.display(),
            config = ?settings.tokenizer,
            format = ?settings.format,
            "tokenizing"
        );

        let mut tokenizer = Tokenizer::with_config(&self.args.path, settings.tokenizer)?;
        match (settings.format, settings.by_file) {
            (OutputFormat::Text, false) => write_text_stream(&mut tokenizer, out)?,
            (OutputFormat::Text, true) => {
                tokenizer.tokenize_all()?;
                write_text_by_file(&tokenizer, out)?;
            },
            (OutputFormat::Json, _) => {
                tokenizer.tokenize_all()?;
                write_json(&tokenizer, out)?;
            },
        }

        let elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        let mut result = CommandResult::success(tokenizer.tokens().len())
            .with_items_processed(tokenizer.files().len())
            .with_execution_time_ms(elapsed_ms);

        for file in tokenizer.files().iter().filter(|file| file.token_count == 0) {
            result = result.with_warning(format!("{} {}", output_messages::EMPTY_FILE, file.name));
        }
        if self.args.verbose {
            for warning in &result.warnings {
                warn!("{}", warning);
            }
        }
        // An empty unit is reported whether or not verbose output is on.
        if tokenizer.tokens().is_empty() {
            let message = format!(
                "{} {}",
                output_messages::NO_TOKENS,
                self.args.path.display()
            );
            warn!("{}", message);
            result = result.with_warning(message);
        }
        debug!(
            files = result.items_processed,
            tokens = result.data,
            elapsed_ms = result.execution_time_ms,
            "tokenize finished"
        );

        Ok(result)
    }

    fn resolve_settings(&self) -> Result<Settings> {
        let mut tokenizer = self.config.tokenizer.clone();

        // The flag wins over the file; both go through the same dot stripping.
        let extension = match &self.args.extension {
            Some(extension) => extension.clone(),
            None => tokenizer.extension.clone(),
        };
        tokenizer = tokenizer.with_extension(extension);
        if tokenizer.extension.is_empty() {
            return Err(JacktError::Validation(
                error_messages::EMPTY_EXTENSION.to_string(),
            ));
        }
        if let Some(policy) = &self.args.line_numbering {
            tokenizer = tokenizer.with_line_numbering(parse_line_numbering(policy)?);
        }
        if let Some(rule) = &self.args.identifiers {
            tokenizer = tokenizer.with_identifiers(parse_identifier_rule(rule)?);
        }

        let format = match &self.args.format {
            Some(name) => parse_format(name)?,
            None => self.config.output.format,
        };

        Ok(Settings {
            tokenizer,
            format,
            by_file: self.args.by_file || self.config.output.by_file,
        })
    }

    fn validate_input(&self) -> Result<()> {
        if !self.args.path.exists() {
            return Err(JacktError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                self.args.path.display()
            )));
        }
        Ok(())
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = CommandResult<usize>;

    fn new(args: Self::Args) -> Self {
        Self::with_config(args, Config::default())
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl CommandDescription for TokenizeCommand {
    fn description() -> &'static str {
        "Tokenize a Jack source file or directory"
    }
}

/// One file's tokens in JSON output.
#[derive(Serialize)]
struct FileTokens<'a> {
    file: &'a str,
    tokens: Vec<TokenRecord<'a>>,
}

/// One token in JSON output.
#[derive(Serialize)]
struct TokenRecord<'a> {
    line: u32,
    category: &'static str,
    lexeme: Cow<'a, str>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            line: token.line,
            category: token.category().as_str(),
            lexeme: token.lexeme(),
        }
    }
}

fn write_token<W: Write>(out: &mut W, token: &Token) -> io::Result<()> {
    writeln!(out, "{}\t{}\t{}", token.line, token.category(), token.lexeme())
}

/// Writes tokens as they are produced, without holding the whole unit.
fn write_text_stream<W: Write>(tokenizer: &mut Tokenizer, out: &mut W) -> Result<()> {
    while let Some(token) = tokenizer.advance()? {
        write_token(out, &token)?;
    }
    Ok(())
}

fn write_text_by_file<W: Write>(tokenizer: &Tokenizer, out: &mut W) -> Result<()> {
    for (index, file) in tokenizer.files().iter().enumerate() {
        writeln!(out, "# {}", file.name)?;
        for token in tokenizer.tokens_of(index).unwrap_or_default() {
            write_token(out, token)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(tokenizer: &Tokenizer, out: &mut W) -> Result<()> {
    let files: Vec<FileTokens<'_>> = tokenizer
        .files()
        .iter()
        .enumerate()
        .map(|(index, file)| FileTokens {
            file: &file.name,
            tokens: tokenizer
                .tokens_of(index)
                .unwrap_or_default()
                .iter()
                .map(TokenRecord::from)
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &files)?;
    writeln!(out)?;
    Ok(())
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs, config: Config) -> Result<()> {
    let command = TokenizeCommand::with_config(args, config);
    debug!(command = TokenizeCommand::name(), "{}", TokenizeCommand::description());
    command.execute().map(|_| ())
}
