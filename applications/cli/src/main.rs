//! reachy-mini - command-line client for the Reachy Mini daemon

mod settings;

use anyhow::Context;
use clap::{Parser, Subcommand};
use reachy_mini_sdk::{
    CancellationToken, EulerPose, FullStateQuery, InterpolationMode, MotorControlMode, MoveHandle,
    MoveRequest, ReachyMiniClient, ReachyMiniError, SourceKind, VolumeRequest,
};
use serde::Serialize;
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "reachy-mini")]
#[command(about = "Control a Reachy Mini robot through its daemon", long_about = None)]
struct Cli {
    /// Settings file path (defaults to ./reachy-mini.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Daemon base URL, overrides settings and environment
    #[arg(short, long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the daemon status
    Status,
    /// Reset the daemon health-check timer
    Health,
    /// Start, stop or restart the daemon
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
    /// Show the motor control mode, or change it
    Motors {
        /// enabled, disabled or gravity_compensation
        #[arg(short, long)]
        mode: Option<MotorControlMode>,
    },
    /// Play the wake-up move
    WakeUp,
    /// Play the go-to-sleep move
    Sleep,
    /// Show the full robot state
    State {
        /// Report poses as 4x4 matrices
        #[arg(long)]
        matrix: bool,
    },
    /// List running moves
    Running,
    /// List the moves in a recorded dataset
    Moves {
        /// Dataset name, e.g. pollen-robotics/reachy-mini-emotions-library
        dataset: String,
    },
    /// Play a recorded move
    Play {
        dataset: String,
        #[arg(value_name = "MOVE")]
        move_name: String,
    },
    /// Stop a running move
    Stop {
        /// Move UUID as returned when the move was started
        uuid: Uuid,
    },
    /// Move the head (and optionally antennas and body) to a target
    Goto {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        z: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        roll: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pitch: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        yaw: f64,
        /// Left and right antenna positions in radians
        #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"], allow_negative_numbers = true)]
        antennas: Option<Vec<f64>>,
        #[arg(long, allow_negative_numbers = true)]
        body_yaw: Option<f64>,
        /// Seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,
        /// linear, minjerk, ease or cartoon
        #[arg(short, long, default_value_t = InterpolationMode::MinimumJerk)]
        interpolation: InterpolationMode,
    },
    /// Show the speaker volume, or change it
    Volume {
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        set: Option<u8>,
    },
    /// List available apps
    Apps {
        /// hf_space, dashboard_selection, local or installed
        #[arg(short, long)]
        kind: Option<SourceKind>,
    },
    /// Show an app install/remove job
    Job { id: String },
}

#[derive(Subcommand)]
enum DaemonAction {
    Start {
        #[arg(long)]
        wake_up: bool,
    },
    Stop {
        #[arg(long)]
        goto_sleep: bool,
    },
    Restart,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reachy_mini=info,reachy_mini_sdk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });

    match run(cli, cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, cancel: CancellationToken) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let client = ReachyMiniClient::new(settings.into_client_config(cli.url))
        .context("Failed to create Reachy Mini client")?;

    match cli.command {
        Commands::Status => {
            let status = client.daemon().with_cancellation(cancel).status().await?;
            print_json(&status)?;
        }
        Commands::Health => {
            print_json(&client.health_check(Some(&cancel)).await?)?;
        }
        Commands::Daemon { action } => {
            let daemon = client.daemon().with_cancellation(cancel);
            let result = match action {
                DaemonAction::Start { wake_up } => daemon.start(wake_up).await?,
                DaemonAction::Stop { goto_sleep } => daemon.stop(goto_sleep).await?,
                DaemonAction::Restart => daemon.restart().await?,
            };
            print_json(&result)?;
        }
        Commands::Motors { mode } => {
            let motors = client.motors().with_cancellation(cancel);
            match mode {
                Some(mode) => print_json(&motors.set_mode(mode).await?)?,
                None => print_json(&motors.status().await?)?,
            }
        }
        Commands::WakeUp => {
            let handle = client.moves().with_cancellation(cancel).wake_up().await?;
            print_handle(&handle);
        }
        Commands::Sleep => {
            let handle = client.moves().with_cancellation(cancel).goto_sleep().await?;
            print_handle(&handle);
        }
        Commands::State { matrix } => {
            let query = FullStateQuery::default().use_pose_matrix(matrix);
            let state = client
                .state()
                .with_cancellation(cancel)
                .full_state(&query)
                .await?;
            print_json(&state)?;
        }
        Commands::Running => {
            for handle in client.moves().with_cancellation(cancel).running().await? {
                print_handle(&handle);
            }
        }
        Commands::Moves { dataset } => {
            let moves = client
                .moves()
                .with_cancellation(cancel)
                .list_recorded_moves(&dataset)
                .await?;
            for name in moves {
                println!("{}", name);
            }
        }
        Commands::Play { dataset, move_name } => {
            let handle = client
                .moves()
                .with_cancellation(cancel)
                .play_recorded_move(&dataset, &move_name)
                .await?;
            print_handle(&handle);
        }
        Commands::Stop { uuid } => {
            let result = client
                .moves()
                .with_cancellation(cancel)
                .stop(&MoveHandle::new(uuid))
                .await?;
            print_json(&result)?;
        }
        Commands::Goto {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
            antennas,
            body_yaw,
            duration,
            interpolation,
        } => {
            let mut request = MoveRequest::new(duration)
                .with_head_pose(EulerPose::new(x, y, z, roll, pitch, yaw))
                .with_interpolation(interpolation);
            if let Some([left, right]) = antennas.as_deref() {
                request = request.with_antennas(*left, *right);
            }
            if let Some(body_yaw) = body_yaw {
                request = request.with_body_yaw(body_yaw);
            }

            let handle = client
                .moves()
                .with_cancellation(cancel)
                .goto(&request)
                .await?;
            print_handle(&handle);
        }
        Commands::Volume { set } => {
            let volume = client.volume().with_cancellation(cancel);
            let response = match set {
                Some(level) => volume.set_volume(VolumeRequest::new(level)).await?,
                None => volume.volume().await?,
            };
            print_json(&response)?;
        }
        Commands::Apps { kind } => {
            let apps_client = client.apps().with_cancellation(cancel);
            let apps = match kind {
                Some(kind) => apps_client.list_available(kind).await?,
                None => apps_client.list_all_available().await?,
            };
            for app in apps {
                if app.description.is_empty() {
                    println!("{} ({})", app.name, app.source_kind);
                } else {
                    println!("{} ({}): {}", app.name, app.source_kind, app.description);
                }
            }
        }
        Commands::Job { id } => {
            let job = client
                .apps()
                .with_cancellation(cancel)
                .job_status(&id)
                .await?;
            print_json(&job)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_handle(handle: &MoveHandle) {
    println!("{}", handle);
}

fn report(err: &anyhow::Error) {
    eprintln!("Error: {:#}", err);

    if let Some(ReachyMiniError::Api { status, body }) = err.downcast_ref::<ReachyMiniError>() {
        eprintln!("Daemon answered HTTP {}", status);
        if !body.is_empty() {
            eprintln!("Response body:\n{}", body);
        }
    }
}
