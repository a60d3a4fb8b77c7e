//! End-to-end emission tests: build trees the way the translator does and
//! check the rendered VHDL text.

use aion_vhdl_config::{load_config_from_str, EmitConfig};
use aion_vhdl_ir::{
    render_to_string, ComponentDecl, ComponentInstance, Design, Element, EntityId, Expr,
    ProcedureCall, Process, SeqStmt, Type, VarDecl, VhdlWriter,
};
use pretty_assertions::assert_eq;

/// The `counter` design: one package, one process holding a single wait.
fn counter_design() -> (Design, EntityId) {
    let mut design = Design::new();
    let mut arch = design.new_architecture("counter");
    let mut proc0 = Process::new("proc0");
    proc0.add_stmt(SeqStmt::wait());
    arch.add_stmt(proc0);
    let id = design.add_entity("counter", "counter_mod", arch);
    design
        .entity_mut(id)
        .requires_package("ieee.std_logic_1164");
    (design, id)
}

/// A two-level hierarchy: `top` instantiates `child` and prints from a process.
fn hierarchy_design() -> Design {
    let mut design = Design::new();

    let mut child_arch = design.new_architecture("child");
    child_arch.add_stmt(Process::anonymous());
    let child = design.add_entity("child", "top.u_child", child_arch);
    design
        .entity_mut(child)
        .set_comment("Generated from Verilog module child");

    let mut top_arch = design.new_architecture("top");
    let decl = ComponentDecl::for_entity(design.entity(child));
    if !top_arch.have_declared_component(decl.name()) {
        top_arch.add_decl(decl);
    }
    top_arch.add_stmt(ComponentInstance::new("u_child", "child"));

    let mut init = Process::new("init");
    init.set_comment("Generated from initial process");
    if !init.have_declared_var("line_buf") {
        init.add_decl(VarDecl::new("line_buf", Type::scalar("line")));
    }
    let mut call = ProcedureCall::new("write");
    call.add_expr(Expr::var_ref("line_buf"));
    call.add_expr(Expr::const_string("Hello, \"world\""));
    init.add_stmt(call);
    let mut wait = SeqStmt::wait();
    wait.set_comment("end of initial block");
    init.add_stmt(wait);
    top_arch.add_stmt(init);

    let top = design.add_entity("top", "top", top_arch);
    let mut entity = design.entity_mut(top);
    entity.requires_package("ieee.std_logic_1164");
    entity.requires_package("std.textio");
    design
}

#[test]
fn counter_example_renders() {
    let (design, _) = counter_design();
    let text = design.render(&EmitConfig::default()).unwrap();
    assert_eq!(
        text,
        "use ieee.std_logic_1164.all;

entity counter is
end entity;

architecture Behavioural of counter is
begin
  proc0: process is
  begin
    wait;
  end process;
end architecture;
"
    );
}

#[test]
fn entity_and_architecture_point_at_each_other() {
    let (design, id) = counter_design();
    let entity = design.entity(id);
    let arch = entity.architecture();
    assert_eq!(arch.parent(), Some(id));
    assert_eq!(arch.entity_name(), entity.name());
    for (_, stmt) in arch.stmts() {
        assert_eq!(stmt.parent(), Some(arch.id()));
    }
}

#[test]
fn edits_through_entity_handle_keep_links() {
    let (mut design, id) = counter_design();
    let mut entity = design.entity_mut(id);
    let mut arch = entity.architecture_mut();
    let inst = arch.add_stmt(ComponentInstance::new("u0", "child"));
    let proc0 = arch.stmts().next().map(|(sid, _)| sid).unwrap();
    arch.process_mut(proc0).unwrap().add_stmt(SeqStmt::wait());
    arch.set_comment("rewritten");

    let arch = design.entity(id).architecture();
    assert_eq!(arch.parent(), Some(id));
    assert_eq!(arch.stmt(inst).parent(), Some(arch.id()));
    assert_eq!(arch.stmt(proc0).as_process().unwrap().stmts().len(), 2);
    assert_eq!(arch.comment().text(), Some("rewritten"));
}

#[test]
fn statements_stay_with_their_architecture() {
    let mut design = Design::new();
    let mut x_arch = design.new_architecture("x");
    let sx = x_arch.add_stmt(Process::new("px"));
    let x = design.add_entity("x", "x", x_arch);
    let mut y_arch = design.new_architecture("y");
    let sy = y_arch.add_stmt(ComponentInstance::new("uy", "c"));
    let y = design.add_entity("y", "y", y_arch);

    // Only the statement bodies move; the slots and their parent links stay put.
    let mut other = Design::new();
    let mut z_arch = other.new_architecture("z");
    let sz = z_arch.add_stmt(Process::new("pz"));
    std::mem::swap(
        design.entity_mut(x).architecture_mut().stmt_mut(sx),
        z_arch.stmt_mut(sz),
    );
    assert_eq!(z_arch.stmt(sz).parent(), Some(z_arch.id()));

    let x_arch = design.entity(x).architecture();
    let y_arch = design.entity(y).architecture();
    assert_ne!(x_arch.id(), y_arch.id());
    assert_eq!(x_arch.stmt(sx).parent(), Some(x_arch.id()));
    assert_eq!(y_arch.stmt(sy).parent(), Some(y_arch.id()));
    assert_eq!(
        x_arch.stmt(sx).as_process().and_then(|p| p.name()),
        Some("pz")
    );
}

#[test]
fn attached_architectures_keep_their_entity() {
    let mut design = Design::new();
    let a_arch = design.new_architecture("a");
    let a = design.add_entity("a", "a", a_arch);
    let b_arch = design.new_architecture("b");
    let b = design.add_entity("b", "b", b_arch);

    // A fresh architecture can be filled in, but it cannot replace an attached one.
    let mut fresh = design.new_architecture("a");
    fresh.add_stmt(Process::new("p"));
    design.entity_mut(a).architecture_mut().set_comment("kept");
    design.entity_mut(b).architecture_mut().add_stmt(Process::new("q"));

    assert_eq!(fresh.parent(), None);
    for id in [a, b] {
        let entity = design.entity(id);
        assert_eq!(entity.architecture().parent(), Some(id));
        assert_eq!(entity.architecture().entity_name(), entity.name());
    }
    assert_eq!(design.entity(a).architecture().comment().text(), Some("kept"));
}

#[test]
fn architectures_from_another_design_stay_distinct() {
    let mut design = Design::new();
    let mut other = Design::new();
    let mut local = design.new_architecture("local");
    local.add_stmt(Process::new("p"));
    let mut foreign = other.new_architecture("foreign");
    foreign.add_stmt(Process::new("p"));

    let l = design.add_entity("local", "local", local);
    let f = design.add_entity("foreign", "foreign", foreign);

    let l_arch = design.entity(l).architecture();
    let f_arch = design.entity(f).architecture();
    assert_ne!(l_arch.id(), f_arch.id());
    let parents: Vec<_> = design
        .entities()
        .flat_map(|e| e.architecture().stmts().map(|(_, s)| s.parent()))
        .collect();
    assert_eq!(parents, vec![Some(l_arch.id()), Some(f_arch.id())]);
}

#[test]
fn component_decl_name_matches_every_entity() {
    let design = hierarchy_design();
    for entity in design.entities() {
        assert_eq!(ComponentDecl::for_entity(entity).name(), entity.name());
    }
}

#[test]
fn hierarchy_renders() {
    let design = hierarchy_design();
    let text = design.render(&EmitConfig::default()).unwrap();
    assert_eq!(
        text,
        "-- Generated from Verilog module child
entity child is
end entity;

architecture Behavioural of child is
begin
  process is
  begin
  end process;
end architecture;

use ieee.std_logic_1164.all;
use std.textio.all;

entity top is
end entity;

architecture Behavioural of top is
  component child is
  end component;
begin
  u_child: child;
  -- Generated from initial process
  init: process is
    variable line_buf : line;
  begin
    write(line_buf, \"Hello, \"\"world\"\"\");
    wait;  -- end of initial block
  end process;
end architecture;
"
    );
}

#[test]
fn rendering_twice_is_identical() {
    let design = hierarchy_design();
    let config = EmitConfig::default();
    let first = design.render(&config).unwrap();
    let second = design.render(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nested_level_shifts_every_line() {
    let (design, id) = counter_design();
    let arch = design.entity(id).architecture();
    let mut buf = Vec::new();
    {
        let mut out = VhdlWriter::new(&mut buf);
        out.indent(1).unwrap();
        arch.emit(&mut out, 1).unwrap();
    }
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "  architecture Behavioural of counter is
  begin
    proc0: process is
    begin
      wait;
    end process;
  end architecture;"
    );
}

#[test]
fn config_controls_indentation_and_header() {
    let config = load_config_from_str(
        r#"
[emit]
use_tabs = true
header = "Converted by aion"
"#,
    )
    .unwrap();
    let (design, _) = counter_design();
    let text = design.render(&config.emit).unwrap();
    assert!(text.starts_with("-- Converted by aion\n\nuse ieee.std_logic_1164.all;\n"));
    assert!(text.contains("\n\tproc0: process is\n\tbegin\n\t\twait;\n\tend process;\n"));
}

#[test]
fn empty_process_still_has_markers() {
    let p = Process::new("idle");
    let text = render_to_string(&p, &EmitConfig::default()).unwrap();
    assert_eq!(text.matches("begin").count(), 1);
    assert_eq!(text.matches("end process;").count(), 1);
}

#[test]
fn write_to_file() {
    let (design, _) = counter_design();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counter.vhd");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        design.write_to(&mut file, &EmitConfig::default()).unwrap();
    }
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, design.render(&EmitConfig::default()).unwrap());
}

#[test]
fn tree_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Design>();
}
