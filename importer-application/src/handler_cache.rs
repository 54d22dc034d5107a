//! 处理器解析缓存（Handler Cache）
//!
//! 并发安全的“命令变体 -> 已解析处理器槽位”记忆化映射：
//! - 槽位一次写入：并发首次解析允许重复计算（计算必须确定性一致），
//!   但槽位以先写入者为准，后到者采用已落槽的值；
//! - 计算失败不落槽，后续调用会重新计算；
//! - 无淘汰：键只增不减，随所属调度器存续。
//!
use crate::error::AppError;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct HandlerCache {
    slots: DashMap<TypeId, usize>,
    scans: AtomicUsize,
    hits: AtomicUsize,
}

impl HandlerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取或计算：命中直接返回，未命中执行 `compute` 并落槽
    pub fn get_or_compute<F>(&self, key: TypeId, compute: F) -> Result<usize, AppError>
    where
        F: FnOnce() -> Result<usize, AppError>,
    {
        if let Some(slot) = self.slots.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(*slot);
        }

        self.scans.fetch_add(1, Ordering::Relaxed);
        let computed = compute()?;

        // 并发竞争时先写入者胜出，双方计算结果确定性一致
        let slot = *self.slots.entry(key).or_insert(computed);
        Ok(slot)
    }

    /// 实际执行过的扫描次数（观测缓存效果用）
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    /// 命中次数
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
