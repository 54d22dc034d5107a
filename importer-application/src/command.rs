/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，例如从某个位置导入文件。
/// - 不可变值对象：同一性由变体与载荷决定，与引用无关；
/// - 不返回业务数据，仅表达执行结果（成功/失败）；
/// - 建议保持语义化的“动宾结构”命名，如 `ImportLocalFiles`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、错误与诊断。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;
}
