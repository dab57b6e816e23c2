use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
mod config;
mod error;
mod hotkeys;
mod layout;
mod services;
mod utils;
mod widget;

use config::Config;
use hotkeys::HotkeyTable;
use services::{create_command_runner, LayoutController, LockScreen, StatusLoop};
use widget::create_widget;

#[derive(Parser, Debug)]
#[command(name = "xkb-layout-state")]
#[command(about = "Виджет статус-бара: показывает и переключает раскладку клавиатуры X11")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "xkb-layout-state.toml")]
    config: String,

    /// Режим сухого запуска (внешние утилиты эмулируются)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (по умолчанию берётся из конфигурации)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Настроить раскладки и печатать текущую при каждом изменении
    Run,
    /// Настроить раскладки и напечатать текущую один раз
    Print,
    /// Переключить раскладку на следующую
    Next,
    /// Заблокировать экран
    Lock,
    /// Показать известные названия горячих клавиш
    Hotkeys,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    // Инициализация системы логирования
    init_tracing(args.log_level.as_deref().unwrap_or(&config.logging.level))?;

    info!("Запуск xkb-layout-state v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let mut widget = create_widget(&config.widget, args.dry_run);
            widget
                .start(&config.widget)
                .context("Не удалось запустить виджет раскладки")?;

            StatusLoop::new(widget, std::io::stdout()).run().await?;
        }
        Command::Print => {
            let mut widget = create_widget(&config.widget, args.dry_run);
            widget
                .start(&config.widget)
                .context("Не удалось запустить виджет раскладки")?;

            println!("{}", widget.poll());
        }
        Command::Next => {
            let runner = create_command_runner(&config.widget, args.dry_run);
            LayoutController::new(&config.widget, runner).advance_layout();
        }
        Command::Lock => {
            let runner = create_command_runner(&config.widget, args.dry_run);
            if let Err(e) = LockScreen::new(&config.lock, runner).lock() {
                error!("Не удалось заблокировать экран: {}", e);
                return Err(e.into());
            }
        }
        Command::Hotkeys => {
            for (name, option) in HotkeyTable::entries() {
                println!("{:<28} {}", name, option);
            }
        }
    }

    info!("xkb-layout-state завершил работу");
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят строкой статуса, логи уходят в stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}
