use crate::config::GeneratorConfig;
use crate::model::TreeInfo;

use super::join_lines;

pub const SUPER_CALL: &str = "super.setupParams(params);";

pub fn render(config: &GeneratorConfig, info: &TreeInfo) -> String {
    let delegate = config
        .is_configurable(&info.parent_type_name)
        .then(|| SUPER_CALL.to_string());
    let puts = info
        .fields
        .names()
        .map(|name| format!("params.put(\"{name}\", {name});"));
    join_lines(delegate.into_iter().chain(puts))
}
