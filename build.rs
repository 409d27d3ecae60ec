//! `proto/` 아래의 서비스 정의를 tonic 코드로 컴파일합니다.
//!
//! 리플렉션 서비스가 스키마를 노출할 수 있도록 파일 디스크립터 세트도 함께 생성합니다.

use std::{env, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 시스템 protoc 설치 여부와 무관하게 빌드되도록 번들된 바이너리를 사용
    if env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()?;
        // SAFETY: 빌드 스크립트는 단일 스레드로 실행됨
        unsafe { env::set_var("PROTOC", protoc) };
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let well_known = protoc_bin_vendored::include_path()?;

    tonic_build::configure()
        .file_descriptor_set_path(out_dir.join("user_descriptor.bin"))
        .compile_protos(
            &["proto/user/v1/user.proto"],
            &[PathBuf::from("proto"), well_known],
        )?;

    println!("cargo:rerun-if-changed=proto/user/v1/user.proto");
    Ok(())
}
