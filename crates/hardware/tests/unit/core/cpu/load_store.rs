//! # Load/Store Tests
//!
//! Memory instructions with and without a cache hierarchy, including the
//! two load-hit policies and the emitted trace.

use crate::common::instruction::*;
use crate::common::{ProgramBuilder, TestContext};
use e20sim_core::common::{AccessKind, CacheLevel, WordAddr};
use e20sim_core::config::LoadPolicy;
use e20sim_core::sim::AccessEvent;
use pretty_assertions::assert_eq;

fn kinds(ctx: &TestContext) -> Vec<(CacheLevel, AccessKind)> {
    ctx.trace.iter().map(|e| (e.level, e.kind)).collect()
}

#[test]
fn uncached_load_reads_memory() {
    let program = ProgramBuilder::new().push(lw(1, 0, 2)).halt().push(0x1234);
    let mut ctx = TestContext::new(&program, None);
    let _ = ctx.run();
    assert_eq!(ctx.reg(1), 0x1234);
    assert!(ctx.trace.is_empty());
    assert_eq!(ctx.cpu().stats.loads, 1);
}

#[test]
fn store_writes_memory_before_caching() {
    let program = ProgramBuilder::new()
        .push(addi(1, 0, 42))
        .push(sw(1, 0, 20))
        .halt();
    let mut ctx = TestContext::new(&program, Some("4,1,1"));
    let _ = ctx.run();
    assert_eq!(ctx.mem(20), 42);
    assert_eq!(kinds(&ctx), vec![(CacheLevel::L1, AccessKind::Store)]);
}

#[test]
fn negative_offset_and_masking() {
    // $2 = 0x2003; lw with -1 reads (0x2003 - 1) & 0x1FFF = 2.
    let program = ProgramBuilder::new().push(lw(1, 2, -1)).halt().push(77);
    let mut ctx = TestContext::new(&program, None);
    ctx.cpu_mut().regs.write(2, 0x2003);
    let _ = ctx.run();
    assert_eq!(ctx.reg(1), 77);
}

#[test]
fn store_address_is_masked() {
    let program = ProgramBuilder::new().push(sw(1, 2, 0)).halt();
    let mut ctx = TestContext::new(&program, None);
    ctx.cpu_mut().regs.write(1, 0xABCD);
    ctx.cpu_mut().regs.write(2, 0xFFFF);
    let _ = ctx.run();
    assert_eq!(ctx.mem(0x1FFF), 0xABCD);
}

#[test]
fn direct_mapped_conflict_misses() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 0))
        .push(lw(1, 0, 4))
        .push(lw(1, 0, 0))
        .halt();
    let mut ctx = TestContext::new(&program, Some("4,1,1"));
    let _ = ctx.run();

    assert_eq!(
        ctx.trace,
        vec![
            AccessEvent {
                level: CacheLevel::L1,
                kind: AccessKind::Miss,
                pc: WordAddr::new(0),
                addr: WordAddr::new(0),
                row: 0,
            },
            AccessEvent {
                level: CacheLevel::L1,
                kind: AccessKind::Miss,
                pc: WordAddr::new(1),
                addr: WordAddr::new(4),
                row: 0,
            },
            AccessEvent {
                level: CacheLevel::L1,
                kind: AccessKind::Miss,
                pc: WordAddr::new(2),
                addr: WordAddr::new(0),
                row: 0,
            },
        ]
    );
}

#[test]
fn repeated_load_hits() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 9))
        .push(lw(2, 0, 9))
        .halt();
    let mut ctx = TestContext::new(&program, Some("4,1,1"));
    let _ = ctx.run();
    assert_eq!(
        kinds(&ctx),
        vec![
            (CacheLevel::L1, AccessKind::Miss),
            (CacheLevel::L1, AccessKind::Hit)
        ]
    );
}

#[test]
fn l1_miss_always_emits_one_l2_line() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 0))
        .push(lw(1, 0, 0))
        .push(lw(1, 0, 4))
        .push(lw(1, 0, 0))
        .halt();
    let mut ctx = TestContext::new(&program, Some("4,1,1,8,2,1"));
    let _ = ctx.run();
    assert_eq!(
        kinds(&ctx),
        vec![
            (CacheLevel::L1, AccessKind::Miss),
            (CacheLevel::L2, AccessKind::Miss),
            (CacheLevel::L1, AccessKind::Hit),
            (CacheLevel::L1, AccessKind::Miss),
            (CacheLevel::L2, AccessKind::Miss),
            (CacheLevel::L1, AccessKind::Miss),
            (CacheLevel::L2, AccessKind::Hit),
        ]
    );
}

#[test]
fn store_goes_to_both_levels() {
    let program = ProgramBuilder::new().push(sw(0, 0, 5)).halt();
    let mut ctx = TestContext::new(&program, Some("4,1,1,8,2,1"));
    let _ = ctx.run();
    assert_eq!(
        kinds(&ctx),
        vec![
            (CacheLevel::L1, AccessKind::Store),
            (CacheLevel::L2, AccessKind::Store)
        ]
    );
    assert_eq!(ctx.cpu().stats.l1.stores, 1);
    assert_eq!(ctx.cpu().stats.l2.stores, 1);
}

#[test]
fn load_hit_leaves_register_unchanged_by_default() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 4))
        .push(addi(1, 0, 3))
        .push(lw(1, 0, 4))
        .halt()
        .push(0x55);
    let mut ctx = TestContext::new(&program, Some("4,1,1"));
    let _ = ctx.run();
    // Second load hits, so $1 keeps the value written by addi.
    assert_eq!(ctx.reg(1), 3);
    assert_eq!(kinds(&ctx)[1], (CacheLevel::L1, AccessKind::Hit));
}

#[test]
fn always_read_updates_register_on_hit() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 4))
        .push(addi(1, 0, 3))
        .push(lw(1, 0, 4))
        .halt()
        .push(0x55);
    let mut ctx = TestContext::with_policy(&program, Some("4,1,1"), LoadPolicy::AlwaysRead);
    let _ = ctx.run();
    assert_eq!(ctx.reg(1), 0x55);
}

#[test]
fn hit_in_l2_counts_as_overall_hit() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 0))
        .push(lw(1, 0, 4))
        .push(addi(1, 0, 1))
        .push(lw(1, 0, 0))
        .halt();
    let mut ctx = TestContext::new(&program, Some("4,1,1,8,2,1"));
    let _ = ctx.run();
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.cpu().stats.l2.hits, 1);
}

#[test]
fn uncached_loads_always_update() {
    let program = ProgramBuilder::new()
        .push(lw(1, 0, 10))
        .push(addi(2, 0, 9))
        .push(sw(2, 0, 10))
        .push(lw(3, 0, 10))
        .halt();
    let mut ctx = TestContext::new(&program, None);
    let _ = ctx.run();
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.reg(3), 9);
    assert_eq!(ctx.mem(10), 9);
    assert_eq!(ctx.cpu().stats.stores, 1);
    assert_eq!(ctx.cpu().stats.loads, 2);
}
