//! 自定义断言辅助模块
//!
//! 提供数据结构不变量相关的断言函数

use algoviz::structures::AvlEntry;

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言数组满足堆序：`min` 为真时每个父节点不大于子节点，否则不小于
pub fn assert_heap_order(data: &[i32], min: bool) {
    for child in 1..data.len() {
        let parent = (child - 1) / 2;
        let ok = if min {
            data[parent] <= data[child]
        } else {
            data[parent] >= data[child]
        };
        assert!(
            ok,
            "堆序被破坏: data[{}]={} 与 data[{}]={}",
            parent, data[parent], child, data[child]
        );
    }
}

/// 断言中序条目严格递增且平衡因子都在 [-1, 1] 内
pub fn assert_avl_invariants(entries: &[AvlEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].value < pair[1].value,
            "中序遍历不是严格递增: {} 后面是 {}",
            pair[0].value,
            pair[1].value
        );
    }
    for entry in entries {
        assert!(
            (-1..=1).contains(&entry.balance),
            "节点 {} 失衡: 平衡因子 {}",
            entry.value,
            entry.balance
        );
    }
}

/// 断言遍历结果恰好覆盖 `0..n` 的每个顶点一次
pub fn assert_visits_all(order: &[usize], n: usize) {
    let mut seen = vec![false; n];
    for &v in order {
        assert!(v < n, "顶点 {} 越界 (n = {})", v, n);
        assert!(!seen[v], "顶点 {} 被访问了两次", v);
        seen[v] = true;
    }
    assert_eq!(order.len(), n, "访问顶点数量不匹配");
}
