//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 사용하는 배너와 설정 요약 출력 함수들을 제공합니다.

use std::net::SocketAddr;

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

pub fn print_startup_summary(address: &SocketAddr, backend: &str, workers: usize) {
    println!();
    print_boxed_title("🚀 USER SERVICE (gRPC)");
    print_sub_task("Listen", &address.to_string());
    print_sub_task("Repository", backend);
    print_sub_task("Workers", &workers.to_string());
    print_sub_task("Reflection", "enabled");
    println!();
}
