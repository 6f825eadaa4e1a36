// ========================================
// sidenav: ページシェル生成
// ========================================
//
// サイドバーとメイン要素、開閉ボタン、WASMの読み込みスクリプトを含む
// 最小限のHTMLを生成する。要素IDはPanelConfigに従う。

use crate::config::PanelConfig;
use crate::nav_tree::{NavNode, NavTree};

pub const DEFAULT_BUTTON_ID: &str = "sidebar-toggle";
pub const DEFAULT_MODULE_PATH: &str = "./sidenav.js";

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub panel: PanelConfig,
    pub button_id: String,
    /// wasm-packが出力するJSモジュールのパス
    pub module_path: String,
    /// サイドバーに表示するファイルツリー
    pub nav: Option<NavTree>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "sidenav".to_string(),
            panel: PanelConfig::default(),
            button_id: DEFAULT_BUTTON_ID.to_string(),
            module_path: DEFAULT_MODULE_PATH.to_string(),
            nav: None,
        }
    }
}

/// HTMLページを生成
pub fn render_page(options: &PageOptions) -> String {
    let panel = &options.panel;
    let initial_width = panel.width_for(panel.start_open);

    let mut links = String::new();
    if let Some(nav) = &options.nav {
        write_nav_node(nav.root(), 2, &mut links);
    }

    // start_openはwasm側で適用するので、ここでは設定をそのまま渡す
    let config_json =
        script_safe(serde_json::to_string(panel).unwrap_or_else(|_| "{}".to_string()));

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            font-family: sans-serif;
        }}
        #{sidebar} {{
            position: fixed;
            top: 0;
            left: 0;
            z-index: 1;
            height: 100%;
            width: {initial_width};
            overflow-x: hidden;
            background-color: #111;
            transition: width 0.5s;
        }}
        #{sidebar} a {{
            display: block;
            padding: 8px 16px;
            color: #ccc;
            text-decoration: none;
            white-space: nowrap;
        }}
        #{sidebar} ul {{
            list-style: none;
            margin: 0;
            padding-left: 12px;
        }}
        #{sidebar} .nav-dir {{
            display: block;
            padding: 8px 16px;
            color: #888;
            white-space: nowrap;
        }}
        #{sidebar} a:hover {{
            color: #fff;
        }}
        #{main} {{
            margin-left: {initial_width};
            padding: 16px;
            transition: margin-left 0.5s;
        }}
    </style>
</head>
<body>
    <nav id="{sidebar}">
{links}    </nav>
    <div id="{main}">
        <button id="{button}" type="button">&#9776;</button>
    </div>
    <script type="module">
        import init, {{ bindToggle }} from {module_js};
        await init();
        bindToggle({button_js}, JSON.stringify({config_json}));
    </script>
</body>
</html>
"#,
        title = escape_html(&options.title),
        sidebar = escape_html(&panel.sidebar_id),
        main = escape_html(&panel.main_id),
        button = escape_html(&options.button_id),
        button_js = js_string(&options.button_id),
        module_js = js_string(&options.module_path),
        initial_width = escape_html(initial_width),
        links = links,
        config_json = config_json,
    )
}

/// ツリーを入れ子のリストとして書き出す
/// ディレクトリは見出し、ファイルはリンク
fn write_nav_node(node: &NavNode, depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);
    if node.is_dir {
        out.push_str(&format!(
            "{}<span class=\"nav-dir\">{}</span>\n",
            indent,
            escape_html(&node.name)
        ));
    } else {
        out.push_str(&format!(
            "{}<a href=\"{}\">{}</a>\n",
            indent,
            escape_html(&node.url),
            escape_html(&node.name)
        ));
    }
    if node.children.is_empty() {
        return;
    }
    out.push_str(&format!("{}<ul>\n", indent));
    for child in &node.children {
        out.push_str(&format!("{}<li>\n", indent));
        write_nav_node(child, depth + 1, out);
        out.push_str(&format!("{}</li>\n", indent));
    }
    out.push_str(&format!("{}</ul>\n", indent));
}

/// `<script>`内に埋め込むJS文字列リテラル
/// スクリプト内ではHTMLエンティティが解釈されないのでJSON形式で書く
fn js_string(text: &str) -> String {
    script_safe(serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string()))
}

fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_has_elements() {
        let html = render_page(&PageOptions::default());
        assert!(html.contains(r#"<nav id="sidebar">"#));
        assert!(html.contains(r#"<div id="main">"#));
        assert!(html.contains(r#"bindToggle("sidebar-toggle""#));
        assert!(html.contains(r#"from "./sidenav.js""#));
        assert!(html.contains("width: 0;"));
    }

    #[test]
    fn test_custom_ids_and_start_open() {
        let options = PageOptions {
            panel: PanelConfig {
                sidebar_id: "nav".to_string(),
                main_id: "content".to_string(),
                start_open: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_page(&options);
        assert!(html.contains(r#"<nav id="nav">"#));
        assert!(html.contains(r#"<div id="content">"#));
        assert!(html.contains("margin-left: 250px;"));
        assert!(html.contains(r#""sidebar_id":"nav""#));
    }

    #[test]
    fn test_nav_tree_and_title_escaped() {
        let nav = NavTree::from_paths(["docs/a&b.md", "docs/guide/<intro>.md"], "docs").unwrap();
        let options = PageOptions {
            title: "Docs & <Notes>".to_string(),
            nav: Some(nav),
            ..Default::default()
        };
        let html = render_page(&options);
        assert!(html.contains("<title>Docs &amp; &lt;Notes&gt;</title>"));
        assert!(html.contains(r#"<a href="index.html">docs</a>"#));
        assert!(html.contains(r#"<a href="docs/a&amp;b.md.html">a&amp;b.md</a>"#));
        assert!(html.contains(r#"<span class="nav-dir">guide</span>"#));
        assert!(html.contains(r#"<a href="docs/guide/&lt;intro&gt;.md.html">&lt;intro&gt;.md</a>"#));

        // guideの中のリンクはguideのリストより深く入れ子になる
        let guide = html.find(r#"<span class="nav-dir">guide</span>"#).unwrap();
        let intro = html.find("&lt;intro&gt;.md</a>").unwrap();
        assert!(intro > guide);
        assert!(html[guide..intro].contains("<ul>"));
        assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    }

    #[test]
    fn test_script_values_are_js_literals() {
        let options = PageOptions {
            button_id: "nav&toggle".to_string(),
            module_path: "/pkg/sidenav.js?v=1&t=2".to_string(),
            ..Default::default()
        };
        let html = render_page(&options);
        assert!(html.contains(r#"from "/pkg/sidenav.js?v=1&t=2";"#));
        assert!(html.contains(r#"bindToggle("nav&toggle", "#));
        // 属性側はHTMLエスケープのまま
        assert!(html.contains(r#"<button id="nav&amp;toggle""#));
    }

    #[test]
    fn test_script_values_cannot_close_script() {
        let options = PageOptions {
            module_path: "./x.js\"</script><script>alert(1)//".to_string(),
            ..Default::default()
        };
        let html = render_page(&options);
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#"from "./x.js\"<\/script><script>alert(1)//";"#));
    }

    #[test]
    fn test_script_close_tag_in_config_is_escaped() {
        let options = PageOptions {
            panel: PanelConfig {
                open_width: "</script>".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_page(&options);
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
