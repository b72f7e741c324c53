// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 启用时在配置的端口上启动 Prometheus 导出器并注册指标说明。
/// 未安装导出器时，各处的计数器调用都是空操作。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_metrics();
    info!("Metrics exporter listening on {}", addr);
}

fn describe_metrics() {
    describe_counter!("cache_hits_total", "Random user served from cache");
    describe_counter!(
        "cache_misses_total",
        "Random user loaded from the relational store"
    );
    describe_counter!(
        "cache_corrupt_entries_total",
        "Cache payloads that failed to decode and were dropped"
    );
    describe_counter!(
        "cache_write_failures_total",
        "Cache writes that failed and were swallowed"
    );
    describe_counter!(
        "unit_of_work_commits_total",
        "Committed transactions, labelled by store"
    );
    describe_counter!(
        "unit_of_work_rollbacks_total",
        "Rolled back transactions, labelled by store"
    );
}
