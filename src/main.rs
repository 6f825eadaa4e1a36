use colored::*;
use log::error;

fn main() {
    let cli_args = sidenav::parse_args();

    if cli_args.show_help {
        println!("{}", sidenav::help_text());
        return;
    }

    // ログレベルを初期化
    sidenav::init_logger(&cli_args.log_level);

    match sidenav::write_page(&cli_args) {
        Ok(path) => {
            if !cli_args.quiet {
                println!("{} {}", "✅ Page generated:".green().bold(), path.display());
            }
        }
        Err(e) => {
            error!("{}", format!("Failed to generate page: {}", e).red().bold());
            std::process::exit(1);
        }
    }
}
