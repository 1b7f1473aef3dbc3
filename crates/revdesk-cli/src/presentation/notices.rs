//! Success notices shown after mutating commands.

use crate::parser::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ConfigSaved,
    ConfigsBatchSaved,
    ProjectEnabled,
    ProjectDisabled,
    ProjectUpdated,
    WebhookTestSent,
}

impl Notice {
    pub const fn text(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::ConfigSaved, Lang::En) => "Configuration saved",
            (Self::ConfigSaved, Lang::Zh) => "配置已保存",
            (Self::ConfigsBatchSaved, Lang::En) => "Configuration sections updated",
            (Self::ConfigsBatchSaved, Lang::Zh) => "配置批量更新成功",
            (Self::ProjectEnabled, Lang::En) => "Project review enabled",
            (Self::ProjectEnabled, Lang::Zh) => "项目审查已启用",
            (Self::ProjectDisabled, Lang::En) => "Project review disabled",
            (Self::ProjectDisabled, Lang::Zh) => "项目审查已禁用",
            (Self::ProjectUpdated, Lang::En) => "Project updated",
            (Self::ProjectUpdated, Lang::Zh) => "项目已更新",
            (Self::WebhookTestSent, Lang::En) => "Test webhook processed",
            (Self::WebhookTestSent, Lang::Zh) => "测试 Webhook 已处理",
        }
    }
}
