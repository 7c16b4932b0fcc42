pub mod list {
    use crate::payload::payload::Payload;
    use std::cmp::Ordering;
    use std::collections::HashMap;
    use std::fmt::Write as _;
    use thiserror::Error;

    // 错误定义
    #[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
    pub enum ListError {
        /// 节点存储无法分配（创建、插入时）
        #[error("节点存储分配失败")]
        Allocation,
        /// 要求有效节点的位置收到了缺失或已失效的句柄
        #[error("无效的节点句柄")]
        InvalidArgument,
    }

    /// 指向仓库中某个节点的稳定句柄。
    ///
    /// 节点编号单调递增、永不复用，节点被移除后旧句柄只会解析失败，
    /// 不会误指向后来分配的节点。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Handle(usize);

    impl Handle {
        /// 原始编号，仅用于调试或外部映射
        pub fn as_raw(&self) -> usize {
            self.0
        }
    }

    #[derive(Debug)]
    struct Node<T> {
        payload: Option<T>,
        prev: Option<usize>,
        next: Option<usize>,
    }

    /// 双向链表的节点仓库。
    ///
    /// 仓库只负责节点存储与链接维护，链本身没有独立的"列表对象"：
    /// 任何一个节点句柄都可以作为整条链操作（求长、找头、排序、打印）
    /// 的入口。一个仓库内可以同时存在多条互不相连的链。
    ///
    /// 载荷的生命周期归调用方：仓库只保存并在移除时原样交还，从不
    /// 克隆或提前丢弃。载荷可以缺失（`None`），这与空字符串是两回事。
    #[derive(Debug)]
    pub struct ListArena<T> {
        nodes: HashMap<usize, Node<T>>,
        next_id: usize,
    }

    /// 从链头到链尾的遍历迭代器，逐节点产出载荷槽（可能缺失）。
    pub struct ChainIter<'a, T> {
        arena: &'a ListArena<T>,
        cursor: Option<usize>,
    }

    impl<T> Default for ListArena<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T> ListArena<T> {
        /// 创建空仓库
        pub fn new() -> Self {
            Self {
                nodes: HashMap::new(),
                next_id: 0,
            }
        }

        /// 分配一个不挂链的新节点，这是开启一条新链的唯一方式。
        ///
        /// 存储预留失败时返回 [`ListError::Allocation`]，此时仓库状态
        /// 不发生任何变化。
        pub fn create(&mut self, payload: Option<T>) -> Result<Handle, ListError> {
            self.nodes.try_reserve(1).map_err(|_| ListError::Allocation)?;
            Ok(Handle(self.alloc(payload)))
        }

        /// 分配新节点并接到 `node` 的正后方。
        ///
        /// `node` 原来的后继（若有）被重新接到新节点之后。`node` 为
        /// `None` 时新节点不带前驱，自成一条游离片段。分配失败时返回
        /// [`ListError::Allocation`]，且不触碰任何既有链接；`node` 给出
        /// 但已失效时返回 [`ListError::InvalidArgument`]。
        pub fn insert_after(
            &mut self,
            node: Option<Handle>,
            payload: Option<T>,
        ) -> Result<Handle, ListError> {
            let anchor = match node {
                Some(_) => Some(self.resolve(node).ok_or(ListError::InvalidArgument)?),
                None => None,
            };
            // 先完成存储预留，保证失败路径上没有半截改动
            self.nodes.try_reserve(1).map_err(|_| ListError::Allocation)?;
            let id = self.alloc(payload);
            if let Some(a) = anchor {
                let old_next = self.nodes[&a].next;
                {
                    let fresh = self.node_mut(id);
                    fresh.prev = Some(a);
                    fresh.next = old_next;
                }
                self.node_mut(a).next = Some(id);
                if let Some(n) = old_next {
                    self.node_mut(n).prev = Some(id);
                }
            }
            Ok(Handle(id))
        }

        /// 把节点摘出链并释放其存储槽，交还它持有的载荷。
        ///
        /// 两侧邻居被重新接到一起（或接到"无邻居"）。移除后该句柄
        /// 永久失效。缺失或失效的句柄返回 [`ListError::InvalidArgument`]。
        pub fn remove(&mut self, node: Option<Handle>) -> Result<Option<T>, ListError> {
            let id = self.resolve(node).ok_or(ListError::InvalidArgument)?;
            let removed = self.nodes.remove(&id).expect("已解析的节点必然存在");
            // 四种结构情形：孤立节点 / 头节点 / 尾节点 / 中间节点
            match (removed.prev, removed.next) {
                (None, None) => {}
                (None, Some(n)) => {
                    self.node_mut(n).prev = None;
                }
                (Some(p), None) => {
                    self.node_mut(p).next = None;
                }
                (Some(p), Some(n)) => {
                    self.node_mut(p).next = Some(n);
                    self.node_mut(n).prev = Some(p);
                }
            }
            Ok(removed.payload)
        }

        /// 整条链的节点数，与从哪个节点进入无关。
        ///
        /// 先回退到链头再向尾计数，O(n)；仓库不为任何链缓存长度。
        /// 句柄缺失或失效时返回 0。
        pub fn size(&self, node: Option<Handle>) -> usize {
            let Some(id) = self.resolve(node) else {
                return 0;
            };
            let mut cursor = Some(self.first_id(id));
            let mut count = 0;
            while let Some(c) = cursor {
                count += 1;
                cursor = self.nodes[&c].next;
            }
            count
        }

        /// 沿 `prev` 链接回退到链头。
        ///
        /// 对链头自身调用返回链头本身；句柄缺失或失效时返回 `None`。
        pub fn get_first(&self, node: Option<Handle>) -> Option<Handle> {
            let id = self.resolve(node)?;
            Some(Handle(self.first_id(id)))
        }

        /// 交换两个节点的载荷槽，链结构保持原样。
        ///
        /// 只有两个句柄都缺失（或都已失效）时才返回
        /// [`ListError::InvalidArgument`]；只缺一个走宽容路径，什么也
        /// 不改直接成功。缺失的载荷和其他载荷值一样参与交换。
        pub fn swap_payload(
            &mut self,
            a: Option<Handle>,
            b: Option<Handle>,
        ) -> Result<(), ListError> {
            match (self.resolve(a), self.resolve(b)) {
                (None, None) => Err(ListError::InvalidArgument),
                (Some(x), Some(y)) => {
                    self.swap_ids(x, y);
                    Ok(())
                }
                _ => Ok(()),
            }
        }

        /// 节点是否仍然存活
        pub fn contains(&self, node: Handle) -> bool {
            self.nodes.contains_key(&node.0)
        }

        /// 读取节点当前持有的载荷（节点失效或载荷缺失时为 `None`）
        pub fn payload(&self, node: Handle) -> Option<&T> {
            self.nodes.get(&node.0).and_then(|n| n.payload.as_ref())
        }

        /// 节点的后继句柄
        pub fn next(&self, node: Handle) -> Option<Handle> {
            self.nodes.get(&node.0).and_then(|n| n.next).map(Handle)
        }

        /// 节点的前驱句柄
        pub fn prev(&self, node: Handle) -> Option<Handle> {
            self.nodes.get(&node.0).and_then(|n| n.prev).map(Handle)
        }

        /// 仓库中存活节点的总数（跨所有链）
        pub fn node_count(&self) -> usize {
            self.nodes.len()
        }

        /// 仓库是否为空
        pub fn is_empty(&self) -> bool {
            self.nodes.is_empty()
        }

        /// 从 `node` 所在链的链头开始遍历整条链。
        ///
        /// 每个节点产出一项，缺失载荷产出 `None`。句柄缺失或失效时
        /// 迭代器为空。
        pub fn iter(&self, node: Option<Handle>) -> ChainIter<'_, T> {
            ChainIter {
                arena: self,
                cursor: self.resolve(node).map(|id| self.first_id(id)),
            }
        }

        fn resolve(&self, node: Option<Handle>) -> Option<usize> {
            let Handle(id) = node?;
            self.nodes.contains_key(&id).then_some(id)
        }

        fn first_id(&self, mut id: usize) -> usize {
            while let Some(p) = self.nodes[&id].prev {
                id = p;
            }
            id
        }

        fn alloc(&mut self, payload: Option<T>) -> usize {
            let id = self.next_id;
            self.next_id += 1;
            self.nodes.insert(
                id,
                Node {
                    payload,
                    prev: None,
                    next: None,
                },
            );
            id
        }

        fn node_mut(&mut self, id: usize) -> &mut Node<T> {
            self.nodes.get_mut(&id).expect("链内节点必然存在")
        }

        fn swap_ids(&mut self, a: usize, b: usize) {
            if a == b {
                return;
            }
            let tmp = self.node_mut(a).payload.take();
            let other = std::mem::replace(&mut self.node_mut(b).payload, tmp);
            self.node_mut(a).payload = other;
        }
    }

    impl<T: Payload> ListArena<T> {
        /// 对链做原地选择排序，只移动载荷，节点地址与链接一律不动。
        ///
        /// 从给定节点（而不是链头）起到链尾排序：每个位置向后扫描，
        /// 一旦发现应排在前面的候选就立刻交换载荷（逐次交换，而非每
        /// 趟一换，以保持相同键值时的既有次序）。升序规则：先比长度
        /// （缺失载荷按 0），长度相同再比字典序。当前位置一旦持有缺
        /// 失载荷即提前结束该趟内层扫描——它已是最小值。句柄缺失或
        /// 失效时返回 [`ListError::InvalidArgument`]。
        pub fn sort(&mut self, node: Option<Handle>) -> Result<(), ListError> {
            let mut select = self.resolve(node).ok_or(ListError::InvalidArgument)?;
            while let Some(first_cmp) = self.nodes[&select].next {
                let mut cmp = Some(first_cmp);
                while let Some(c) = cmp {
                    // 交换可能把缺失载荷换进当前位置，所以每次都要重查
                    let Some(sel) = self.nodes[&select].payload.as_ref() else {
                        break;
                    };
                    let should_swap = match self.nodes[&c].payload.as_ref() {
                        None => true,
                        Some(cand) => match sel.length().cmp(&cand.length()) {
                            Ordering::Greater => true,
                            Ordering::Equal => cand.lex_cmp(sel) == Ordering::Less,
                            Ordering::Less => false,
                        },
                    };
                    if should_swap {
                        self.swap_ids(select, c);
                    }
                    cmp = self.nodes[&c].next;
                }
                select = first_cmp;
            }
            Ok(())
        }

        /// 渲染整条链的诊断文本，不落盘、不解析回读。
        ///
        /// 从链头到链尾输出 `{-值1--值2-...-值N-}`，缺失载荷用
        /// `-(null)-` 占位。句柄缺失或失效时返回
        /// [`ListError::InvalidArgument`]。
        pub fn render(&self, node: Option<Handle>) -> Result<String, ListError> {
            let id = self.resolve(node).ok_or(ListError::InvalidArgument)?;
            let mut out = String::from("{");
            let mut cursor = Some(self.first_id(id));
            while let Some(c) = cursor {
                let n = &self.nodes[&c];
                match n.payload.as_ref() {
                    Some(p) => {
                        let _ = write!(out, "-{p}-");
                    }
                    None => out.push_str("-(null)-"),
                }
                cursor = n.next;
            }
            out.push('}');
            Ok(out)
        }

        /// 把 [`render`](Self::render) 的结果写到标准输出并换行
        pub fn print(&self, node: Option<Handle>) -> Result<(), ListError> {
            println!("{}", self.render(node)?);
            Ok(())
        }
    }

    impl<'a, T> Iterator for ChainIter<'a, T> {
        type Item = Option<&'a T>;

        fn next(&mut self) -> Option<Self::Item> {
            let id = self.cursor?;
            let n = &self.arena.nodes[&id];
            self.cursor = n.next;
            Some(n.payload.as_ref())
        }
    }

}
