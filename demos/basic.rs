//! Drives a [`Heap`] directly and prints what comes back, ending with
//! the stats dump.

use mapalloc::Heap;

fn main() {
    let mut heap = Heap::new();

    unsafe {
        let a = heap.allocate(100).unwrap();
        println!("Requested 100 bytes, received {a:p}");

        let b = heap.allocate(200).unwrap();
        println!("Requested 200 bytes, received {b:p}");

        heap.release(a);
        heap.release(b);

        // A and B were neighbours, so their merged span serves this.
        let c = heap.allocate(250).unwrap();
        println!("Requested 250 bytes, received {c:p} (A again: {})", c == a);

        heap.release(c);

        // Large enough for three pages: mapped and unmapped wholesale.
        let big = heap.allocate(10_000).unwrap();
        println!("Requested 10000 bytes, received {big:p}");
        heap.release(big);
    }

    println!("\n{}", heap.stats());
}
