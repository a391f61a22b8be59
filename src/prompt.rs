use crate::session::SessionContext;

pub fn build_prompt(module: &str, context: &SessionContext) -> String {
    let header = format!("请根据提供的财务报表和背景信息，完成以下分析模块：{module}。");
    let params = context
        .fields()
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n{params}")
}
