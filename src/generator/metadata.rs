use crate::config::GeneratorConfig;
use crate::model::TreeInfo;

pub const ID_ENTRY: &str = "id";
pub const STYLE_TAB: &str = "tab:Style";
pub const CONTENT_TAB: &str = "tab:Content";

/// Entries added after `id` for configurable content.
pub const CONFIG_ENTRIES: [&str; 4] = ["config", "configHandle", "localConfig", "localConfig.*"];

const STYLE_ANCHOR: &str = "config";
const CONTENT_ANCHOR: &str = "localConfig.*";

/// `id`, the config entries for configurable content, then every field.
pub fn include_entries(config: &GeneratorConfig, info: &TreeInfo) -> Vec<String> {
    let mut entries = vec![ID_ENTRY.to_string()];
    if config.is_configurable(&info.parent_type_name) {
        entries.extend(CONFIG_ENTRIES.iter().map(|e| e.to_string()));
    }
    entries.extend(info.fields.names().map(str::to_string));
    entries
}

/// The include entries with `tab:Style` before the first `config` and
/// `tab:Content` after the first `localConfig.*`, each at most once.
pub fn edit_entries(include: &[String]) -> Vec<String> {
    let mut edit = Vec::with_capacity(include.len() + 2);
    let mut style_tab_added = false;
    let mut content_tab_added = false;

    for entry in include {
        if !style_tab_added && entry == STYLE_ANCHOR {
            edit.push(STYLE_TAB.to_string());
            style_tab_added = true;
        }
        edit.push(entry.clone());
        if !content_tab_added && entry == CONTENT_ANCHOR {
            edit.push(CONTENT_TAB.to_string());
            content_tab_added = true;
        }
    }
    edit
}

/// Renders the annotation. Entries are quoted and comma-terminated; only the
/// include list has its trailing comma stripped.
pub fn render(include: &[String], edit: &[String]) -> String {
    let edit_list = quoted_list(edit);
    let mut include_list = quoted_list(include);
    include_list.pop();
    format!("@KRUDFields(edit={{{edit_list}}},\n        include={{{include_list}}})\n")
}

fn quoted_list(entries: &[String]) -> String {
    entries.iter().map(|e| format!("\"{e}\",")).collect()
}
