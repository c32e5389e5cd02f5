#![no_main]

use libfuzzer_sys::fuzz_target;
use wtool_format::{ContainerInfo, ReadOptions, WtHeader};

fuzz_target!(|data: &[u8]| {
    let mut reader = data;
    let Ok(header) = WtHeader::read(&mut reader, &ReadOptions::lenient()) else {
        assert!(data.len() < 12);
        return;
    };

    assert_eq!(&header.to_bytes()[..], &data[..12]);
    assert_eq!(header.total_file_size(), header.payload_size_bytes() + 12);

    let info = ContainerInfo {
        header,
        file_size: data.len() as u64,
    };
    let _ = info.size_status();
});
