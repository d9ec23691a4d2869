//! Installs [`MapAlloc`] as the global allocator and runs ordinary
//! std code on top of it. Single-threaded on purpose; see the
//! [`MapAlloc`] docs.

use mapalloc::MapAlloc;

#[global_allocator]
static ALLOCATOR: MapAlloc = MapAlloc::new();

fn main() {
    // Box example
    let val_box = Box::new(22);
    println!("Box Value: {}, At: {:p}", val_box, val_box);

    // Vec example
    let mut v = Vec::new();
    for i in 0..5 {
        v.push(i * 10);
        println!("Added {}; Capacity: {}; At: {:p}", v[i], v.capacity(), v.as_ptr());
    }

    // String example
    let msg = String::from("Heap Testing");
    println!("\nString '{}' - At: {:p}", msg, msg.as_ptr());

    // Merge example
    let a = Box::new([0u8; 64]);
    let b = Box::new([0u8; 64]);
    let ptr_a = a.as_ptr();

    drop(a);
    drop(b);

    let c = Box::new([0u8; 128]);
    let ptr_c = c.as_ptr();

    if ptr_a == ptr_c {
        println!("Correctly reused at {ptr_c:p}");
    } else {
        println!("Not correctly reused. A was at {ptr_a:p} and C is at {ptr_c:p}");
    }

    println!("\n{}", ALLOCATOR.stats());
}
