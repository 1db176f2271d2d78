//! CLI for evaluating retry policies against hypothetical failures.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cqlretry_core::config;
use cqlretry_core::protocol::{
    Consistency, ErrorCode, ErrorResponse, ReadTimeout, Unavailable, WriteTimeout, WriteType,
};
use cqlretry_core::retry::{FallthroughRetryPolicy, ProxyError, RetryPolicy, DEFAULT_RETRY_POLICY};
use std::path::PathBuf;

use commands::{run_decide, run_simulate};

/// Top-level CLI for cqlretry.
#[derive(Debug, Parser)]
#[command(name = "cqlretry")]
#[command(about = "cqlretry: show how the proxy retry policy reacts to a failure", long_about = None)]
pub struct Cli {
    /// Policy to evaluate.
    #[arg(long, value_enum, default_value_t = PolicyKind::Default, global = true)]
    pub policy: PolicyKind,

    /// Config file to use instead of ~/.config/cqlretry/config.toml.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Built-in policies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Built-in proxy rules.
    Default,
    /// Never retry.
    Fallthrough,
}

impl PolicyKind {
    pub fn policy(self) -> &'static dyn RetryPolicy {
        match self {
            PolicyKind::Default => &DEFAULT_RETRY_POLICY,
            PolicyKind::Fallthrough => &FallthroughRetryPolicy,
        }
    }
}

/// Options shared by every error kind.
#[derive(Debug, Clone, Args)]
pub struct DecideArgs {
    /// Retries already performed for the request.
    #[arg(long, default_value = "0", value_name = "N")]
    pub retry_count: u32,

    /// Run the retry loop against a request that keeps failing this way.
    #[arg(long, conflicts_with = "retry_count")]
    pub simulate: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Read timeout reported by the coordinator.
    ReadTimeout {
        /// Replicas that responded.
        #[arg(long)]
        received: i32,
        /// Replicas required by the consistency level.
        #[arg(long)]
        block_for: i32,
        /// The data replica responded.
        #[arg(long)]
        data_present: bool,
        #[arg(long, default_value = "LOCAL_QUORUM")]
        consistency: Consistency,
        #[command(flatten)]
        args: DecideArgs,
    },

    /// Write timeout reported by the coordinator.
    WriteTimeout {
        /// Write type, e.g. SIMPLE, BATCH, BATCH_LOG.
        #[arg(long)]
        write_type: WriteType,
        #[arg(long, default_value = "0")]
        received: i32,
        #[arg(long, default_value = "1")]
        block_for: i32,
        #[arg(long, default_value = "LOCAL_QUORUM")]
        consistency: Consistency,
        #[command(flatten)]
        args: DecideArgs,
    },

    /// Not enough replicas alive to attempt the request.
    Unavailable {
        #[arg(long, default_value = "2")]
        required: i32,
        #[arg(long, default_value = "1")]
        alive: i32,
        #[arg(long, default_value = "LOCAL_QUORUM")]
        consistency: Consistency,
        #[command(flatten)]
        args: DecideArgs,
    },

    /// Any other error response.
    Error {
        /// Error code: name (read_failure), hex (0x1300) or decimal.
        #[arg(long)]
        code: ErrorCode,
        #[arg(long, default_value = "")]
        message: String,
        #[command(flatten)]
        args: DecideArgs,
    },
}

impl CliCommand {
    /// Build the typed failure this command describes.
    pub fn into_parts(self) -> (ProxyError, DecideArgs) {
        match self {
            CliCommand::ReadTimeout {
                received,
                block_for,
                data_present,
                consistency,
                args,
            } => (
                ReadTimeout {
                    consistency,
                    received,
                    block_for,
                    data_present,
                }
                .into(),
                args,
            ),
            CliCommand::WriteTimeout {
                write_type,
                received,
                block_for,
                consistency,
                args,
            } => (
                WriteTimeout {
                    consistency,
                    received,
                    block_for,
                    write_type,
                }
                .into(),
                args,
            ),
            CliCommand::Unavailable {
                required,
                alive,
                consistency,
                args,
            } => (
                Unavailable {
                    consistency,
                    required,
                    alive,
                }
                .into(),
                args,
            ),
            CliCommand::Error {
                code,
                message,
                args,
            } => (ErrorResponse::new(code, message).into(), args),
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let policy = cli.policy.policy();
        let (err, args) = cli.command.into_parts();
        let lines = if args.simulate {
            run_simulate(policy, &err, cfg.retry.max_attempts)
        } else {
            vec![run_decide(policy, &err, args.retry_count)]
        };
        for line in lines {
            println!("{line}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
