use std::process::Command;

fn main() {
    let cli_args = sidenav::parse_args();
    if cli_args.show_help {
        println!("build_wasm: runs wasm-pack, then writes index.html\n\n{}", sidenav::help_text());
        return;
    }
    sidenav::init_logger(&cli_args.log_level);

    println!("🚀 Building sidenav WASM...");

    // 1. wasm-pack でビルド
    println!("📦 Running wasm-pack build...");
    let status = match Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--out-dir",
            cli_args.out_dir.as_str(),
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .status()
    {
        Ok(status) => status,
        Err(e) => {
            eprintln!("❌ Failed to execute wasm-pack: {}", e);
            std::process::exit(1);
        }
    };

    if !status.success() {
        eprintln!("❌ wasm-pack build failed");
        std::process::exit(1);
    }

    println!("✅ WASM build completed");

    // 2. HTML ファイルを生成
    println!("📝 Generating HTML file...");
    match sidenav::write_page(&cli_args) {
        Ok(path) => println!("✅ HTML file generated: {}", path.display()),
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    println!("\n🎉 Build complete! Serve {} with any static file server.", cli_args.out_dir);
}
